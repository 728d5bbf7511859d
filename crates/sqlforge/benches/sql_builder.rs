use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlforge::prelude::*;
use sqlforge::{Query, SelectExpr};

/// Build a query selecting `n` columns with `n` AND-ed parameter filters:
/// SELECT t.col0, ... FROM t WHERE t.col0 = @p0 AND t.col1 = @p1 ...
fn build_select(n: usize) -> Query {
    let table = Table::new("t");
    let columns: Vec<_> = (0..n).map(|i| table.column(format!("col{i}"))).collect();

    let mut filter: Option<Predicate> = None;
    for (i, column) in columns.iter().enumerate() {
        let condition = column.eq(param(format!("p{i}")).unwrap());
        filter = Some(match filter {
            Some(prev) => prev.and(condition),
            None => condition,
        });
    }

    let step = select(columns.iter().map(SelectExpr::from))
        .from(&table)
        .unwrap();
    match filter {
        Some(filter) => step.where_(filter).unwrap().build(),
        None => step.build(),
    }
}

fn bench_to_sql(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/to_sql");

    for n in [1, 5, 10, 50, 100] {
        let query = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &query, |b, query| {
            b.iter(|| black_box(query.to_sql().unwrap()));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/build_and_render");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let query = build_select(n);
                black_box(query.to_sql().unwrap());
            });
        });
    }

    group.finish();
}

fn bench_pretty_print(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/pretty");

    for n in [1, 10, 50] {
        let query = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &query, |b, query| {
            b.iter(|| black_box(query.to_pretty_sql().unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_to_sql, bench_build_and_render, bench_pretty_print);
criterion_main!(benches);
