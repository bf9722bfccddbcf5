use std::hint::black_box;

use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use maxtree::{Interval, IntervalTree, NoopSink};

use crate::{random_tree, Lfsr};

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("overlaps");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let t = random_tree(&mut Lfsr::default(), n_values);

    bench_narrow(n_values, g, &t);
    bench_wide(n_values, g, &t);
    bench_all(n_values, g, &t);
}

macro_rules! overlaps_bench {
    (
        $name:ident,
        $low:expr,
        $high:expr
    ) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &IntervalTree<(), NoopSink>)
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    n_values,
                    bench_name: stringify!($name),
                };

                let query = Interval::new($low, $high);

                g.throughput(Throughput::Elements(n_values as _));
                // Values per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter(|| black_box(t.find_overlaps(&query).unwrap()))
                });
            }
        }
    };
}

overlaps_bench!(narrow, 42, 100);
overlaps_bench!(wide, 10_000, 40_000);
overlaps_bench!(all, 0, i64::from(u16::MAX));
