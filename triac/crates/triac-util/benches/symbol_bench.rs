use criterion::{black_box, criterion_group, criterion_main, Criterion};
use triac_util::{DataType, Pos, SymbolTable};

fn declare_and_lookup(c: &mut Criterion) {
    c.bench_function("symbol_table_declare_lookup_1000", |b| {
        b.iter(|| {
            let mut table = SymbolTable::new();
            for i in 0..1000 {
                let name = format!("v{i}");
                table
                    .declare(&name, DataType::Int, Pos::new(1, i as u32))
                    .unwrap();
            }
            for i in 0..1000 {
                let name = format!("v{i}");
                black_box(table.lookup(&name, Pos::new(2, i as u32)));
            }
        })
    });
}

criterion_group!(benches, declare_and_lookup);
criterion_main!(benches);
