use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rowmap::row::Row;
use rowmap::sqlite::Conn;
use rowmap::sync::ConnExt;

pub struct User {
    pub id: i64,
    pub name: String,
    pub hair_color: Option<String>,
}

fn connection(size: usize) -> Conn {
    let mut conn = Conn::new("sqlite::memory:").unwrap();
    conn.execute_batch(
        "CREATE TABLE users (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            hair_color TEXT,
            bio CLOB
        )",
    )
    .unwrap();
    for i in 0..size {
        let hair_color = (i % 2 == 0).then_some("black");
        conn.execute(
            "INSERT INTO users (name, hair_color, bio) VALUES (?, ?, ?)",
            (format!("User {}", i), hair_color, "x".repeat(256)),
        )
        .unwrap();
    }
    conn
}

fn bench_query_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_rows");
    for size in [1, 100, 10_000] {
        let mut conn = connection(size);

        group.bench_with_input(BenchmarkId::new("row", size), &size, |b, _| {
            b.iter(|| {
                let rows: Vec<Row> = conn
                    .query_rows("SELECT id, name, hair_color, bio FROM users", (), Ok)
                    .unwrap();
                rows
            })
        });

        group.bench_with_input(BenchmarkId::new("struct", size), &size, |b, _| {
            b.iter(|| {
                conn.query_rows("SELECT id, name, hair_color FROM users", (), |mut row| {
                    Ok(User {
                        id: row.take("id")?,
                        name: row.take("name")?,
                        hair_color: row.take("hair_color")?,
                    })
                })
                .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_execute(c: &mut Criterion) {
    let mut conn = connection(0);
    c.bench_function("execute_insert", |b| {
        b.iter(|| {
            conn.execute(
                "INSERT INTO users (name, hair_color) VALUES (?, ?)",
                ("bench", None::<&str>),
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_query_rows, bench_execute);
criterion_main!(benches);
