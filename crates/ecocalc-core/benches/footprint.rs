//! Criterion benchmarks for the footprint aggregation model.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use ecocalc_core::form::{HouseInputs, VehicleInputs};
use ecocalc_core::{FlightEntry, FootprintForm, FootprintState, FormUpdate};

fn sample_form(flights: usize) -> FootprintForm {
    let routes = [("JFK", "LHR"), ("LAX", "SYD"), ("CDG", "HND")];
    FootprintForm {
        house: HouseInputs {
            electricity: 5_000.0,
            natural_gas: 1_000.0,
            ..HouseInputs::default()
        },
        flights: routes
            .iter()
            .take(flights)
            .map(|(from, to)| FlightEntry::new(*from, *to))
            .collect(),
        car: VehicleInputs::with_mileage(10_000.0),
        ..FootprintForm::default()
    }
}

fn bench_footprint(c: &mut Criterion) {
    let mut group = c.benchmark_group("FromForm");
    for flights in [0usize, 1, 3] {
        let form = sample_form(flights);
        group.bench_with_input(BenchmarkId::from_parameter(flights), &form, |b, form| {
            b.iter(|| FootprintState::from_form(black_box(form.clone())).unwrap());
        });
    }
    group.finish();

    let mut state = FootprintState::from_form(sample_form(3)).unwrap();
    let mut mileage = 0.0;
    c.bench_function("ApplyCarUpdate", |b| {
        b.iter(|| {
            mileage += 1.0;
            state
                .apply(FormUpdate::Car(VehicleInputs::with_mileage(black_box(mileage))))
                .unwrap()
        });
    });
}

criterion_group!(benches, bench_footprint);
criterion_main!(benches);
