// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Benchmarks for the ordered multiset and the store.
//!
//! Run with: cargo bench
//!
//! Benchmarks include:
//! - Insert throughput for scattered and sorted keys
//! - Lookup and removal on a populated multiset
//! - Buy/sell command processing

use collectible_store::{Category, Coin, Command, Customer, CustomerId, Item, OrderedMultiset, Store};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

// =============================================================================
// Helper Functions
// =============================================================================

/// Deterministic scattered keys, so the tree stays reasonably shallow.
fn scattered_keys(count: usize) -> Vec<u32> {
    (0..count as u64)
        .map(|i| (i.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 40) as u32)
        .collect()
}

fn make_coin(i: u32) -> Item {
    Coin::new("Lincoln", 1900 + (i % 120) as u16, 1 + i % 70).into()
}

// =============================================================================
// Multiset Benchmarks
// =============================================================================

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for count in [100, 1_000, 10_000].iter() {
        let keys = scattered_keys(*count);
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("scattered", count), &keys, |b, keys| {
            b.iter(|| {
                let set: OrderedMultiset<u32> = keys.iter().copied().collect();
                black_box(set);
            })
        });
    }

    // Sorted input degrades the unbalanced tree to a list.
    for count in [100, 1_000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("sorted", count), count, |b, &count| {
            b.iter(|| {
                let set: OrderedMultiset<u32> = (0..count as u32).collect();
                black_box(set);
            })
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let keys = scattered_keys(10_000);
    let set: OrderedMultiset<u32> = keys.iter().copied().collect();

    c.bench_function("count_10k", |b| {
        let mut i = 0;
        b.iter(|| {
            let key = keys[i % keys.len()];
            i += 1;
            black_box(set.count(black_box(&key)));
        })
    });
}

fn bench_remove(c: &mut Criterion) {
    let keys = scattered_keys(1_000);
    let set: OrderedMultiset<u32> = keys.iter().copied().collect();

    c.bench_function("remove_all_1k", |b| {
        b.iter(|| {
            let mut set = set.clone();
            for key in &keys {
                set.remove(key);
            }
            black_box(set);
        })
    });
}

// =============================================================================
// Store Benchmarks
// =============================================================================

fn bench_buy_sell(c: &mut Criterion) {
    let mut group = c.benchmark_group("buy_sell");

    for count in [100u32, 1_000].iter() {
        group.throughput(Throughput::Elements(u64::from(*count) * 2));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let customer = CustomerId::new(1).unwrap();
            b.iter(|| {
                let mut store = Store::new();
                store
                    .add_customer(Customer::new(customer, "Mickey Mouse").unwrap())
                    .unwrap();
                for i in 0..count {
                    let buy = Command::Buy {
                        customer,
                        category: Category::Coin,
                        item: make_coin(i),
                    };
                    store.execute(buy).unwrap();
                }
                for i in 0..count {
                    let sell = Command::Sell {
                        customer,
                        category: Category::Coin,
                        item: make_coin(i),
                    };
                    let _ = store.execute(sell);
                }
                black_box(&store);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_lookup, bench_remove, bench_buy_sell);
criterion_main!(benches);
