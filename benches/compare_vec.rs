#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};

use intvec::IntVec;

fn standard_compare(c: &mut Criterion) {
    const SMALL_COUNT: i32 = 100;
    const LARGE_COUNT: i32 = 1000;

    for count in [SMALL_COUNT, LARGE_COUNT] {
        c.bench_function(&format!("intvec push {} values", count), |b| {
            b.iter(|| {
                let mut buf = IntVec::new();
                for value in 0..count {
                    buf.push(black_box(value));
                }
            });
        });

        c.bench_function(
            &format!("intvec with_capacity({0}) push {0} values", count),
            |b| {
                b.iter(|| {
                    let mut buf = IntVec::with_capacity(count as usize);
                    for value in 0..count {
                        buf.push(black_box(value));
                    }
                });
            },
        );

        c.bench_function(&format!("stdvec push {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<i32>::new();
                for value in 0..count {
                    buf.push(black_box(value));
                }
            });
        });

        c.bench_function(
            &format!("stdvec with_capacity({0}) push {0} values", count),
            |b| {
                b.iter(|| {
                    let mut buf = Vec::<i32>::with_capacity(count as usize);
                    for value in 0..count {
                        buf.push(black_box(value));
                    }
                });
            },
        );

        c.bench_function(&format!("intvec clone {} values", count), |b| {
            let src: IntVec = (0..count).collect();
            b.iter(|| black_box(&src).clone());
        });

        c.bench_function(&format!("stdvec clone {} values", count), |b| {
            let src: Vec<i32> = (0..count).collect();
            b.iter(|| black_box(&src).clone());
        });

        c.bench_function(&format!("intvec cursor sum {} values", count), |b| {
            let src: IntVec = (0..count).collect();
            b.iter(|| {
                let src = black_box(&src);
                unsafe { src.begin().iter_to(src.end()) }.sum::<i32>()
            });
        });

        c.bench_function(&format!("intvec slice sum {} values", count), |b| {
            let src: IntVec = (0..count).collect();
            b.iter(|| black_box(&src).iter().sum::<i32>());
        });
    }
}

criterion_group!(benches, standard_compare);
criterion_main!(benches);
