use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tablewright::prelude::*;

fn wide_table(t: &mut Table) -> Result<()> {
    t.auto_increment();
    for i in 0..32 {
        t.string(format!("col_{i}")).size(64).comment("generated");
    }
    t.big_int("owner_id").unsigned().references("owners.id")?;
    t.string("slug").unique();
    Ok(())
}

fn create(c: &mut Criterion) {
    let mut group = c.benchmark_group("create");

    group.bench_function("small", |b| {
        b.iter(|| {
            let sql = Schema::create(black_box("users"), |t| {
                t.auto_increment();
                t.string("name");
                t.tiny_int("age").unsigned().nullable();
                Ok(())
            });
            black_box(sql)
        })
    });

    group.bench_function("wide", |b| {
        b.iter(|| black_box(Schema::create(black_box("wide"), wide_table)))
    });

    group.finish();
}

fn alter(c: &mut Criterion) {
    let mut group = c.benchmark_group("alter");

    group.bench_function("mixed_actions", |b| {
        b.iter(|| {
            let sql = Schema::alter(black_box("users"), |a| {
                a.add(|t| {
                    t.string("nickname").nullable();
                    t.int("team_id").references("teams.id")?;
                    Ok(())
                })?;
                a.change(
                    |t| {
                        t.int("x");
                        t.int("y");
                        Ok(())
                    },
                    ["left", "right"],
                )?;
                a.drop_column(["a", "b", "c"]);
                a.add_index("fulltext", "search", ["nickname"])?;
                Ok(())
            });
            black_box(sql)
        })
    });

    group.finish();
}

fn drop_tables(c: &mut Criterion) {
    let names: Vec<String> = (0..64).map(|i| format!("table_{i}")).collect();

    c.bench_function("drop_list", |b| {
        b.iter(|| black_box(Schema::drop(black_box(names.clone()))))
    });
}

criterion_group!(benches, create, alter, drop_tables);
criterion_main!(benches);
