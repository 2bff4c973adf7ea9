use criterion::{black_box, criterion_group, criterion_main, Criterion};
use garment_fit_rust::profiles::sample_profiles;
use garment_fit_rust::{FitEngine, FitRequest, GarmentType, SizeLabel, SvgFormatter};

fn bench_evaluate_and_visualize(c: &mut Criterion) {
    let engine = FitEngine::new().expect("built-in tables validate");
    let profiles = sample_profiles();

    c.bench_function("evaluate_and_visualize/all_garments", |b| {
        b.iter(|| {
            for profile in &profiles {
                for garment in GarmentType::all() {
                    let report = engine.evaluate_and_visualize(
                        black_box(garment.as_str()),
                        black_box("M"),
                        Some(&profile.measurements),
                    );
                    black_box(report);
                }
            }
        })
    });

    c.bench_function("recommend/all_garments", |b| {
        b.iter(|| {
            for profile in &profiles {
                for garment in GarmentType::all() {
                    black_box(engine.recommend(garment.as_str(), Some(&profile.measurements)));
                }
            }
        })
    });

    let report = engine.evaluate_and_visualize("pants", "L", Some(&profiles[1].measurements));
    c.bench_function("svg/pants", |b| {
        b.iter(|| black_box(SvgFormatter::format(black_box(&report.visualization))))
    });
}

fn bench_evaluate_many(c: &mut Criterion) {
    let engine = FitEngine::new().expect("built-in tables validate");
    let requests: Vec<FitRequest> = sample_profiles()
        .into_iter()
        .flat_map(|profile| {
            GarmentType::all().iter().flat_map(move |garment| {
                let measurements = profile.measurements.clone();
                SizeLabel::all()
                    .iter()
                    .map(move |size| FitRequest::new(garment.as_str(), size.as_str(), Some(measurements.clone())))
            })
        })
        .collect();

    c.bench_function("evaluate_many/profiles_x_garments_x_sizes", |b| {
        b.iter(|| black_box(engine.evaluate_many(black_box(&requests))))
    });
}

criterion_group!(benches, bench_evaluate_and_visualize, bench_evaluate_many);
criterion_main!(benches);
