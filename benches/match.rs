use criterion::{Criterion, criterion_group, criterion_main};
use rbregex::Regexp;
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("compile and match", |b| {
        b.iter(|| {
            let re = Regexp::new(r"\d+").unwrap();
            let _result = re.find(black_box("Price: $123"));
        })
    });

    c.bench_function("match", |b| {
        let re = Regexp::new(r"(\d{1,2})/(\d{1,2})/(\d{4})").unwrap();
        b.iter(|| {
            let _result = re.find(black_box("Born on 12/25/1990 and graduated on 5/15/2012"));
        })
    });

    c.bench_function("match with offset", |b| {
        let re = Regexp::new(r"[a-z]+ing").unwrap();
        b.iter(|| {
            let _result = re.find_from(black_box("singing in the rain, dancing in the dark"), 8);
        })
    });

    c.bench_function("materialize groups", |b| {
        let re = Regexp::new(r"(\w+)@(\w+)\.(\w+)").unwrap();
        b.iter(|| {
            let m = re.find(black_box("mail me at someone@example.com today")).unwrap().unwrap();
            let _captures = m.captures().len();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
