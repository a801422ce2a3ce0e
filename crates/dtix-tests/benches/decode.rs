use dtix_decoder::{EventDecoder, decode_event};
use dtix_encoder::EventEncoder;
use dtix_tests::{drifted_bytes, encode_unchecked, sample_record};
use dtix_types::{DecodeLimits, TicketAreaMapping};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn bench_decode_sample(c: &mut Criterion) {
    let bytes = encode_unchecked(&sample_record()).bytes;

    c.bench_function("decode_sample", |b| {
        b.iter(|| decode_event(&bytes).unwrap());
    });
}

fn bench_decode_drifted(c: &mut Criterion) {
    let bytes = drifted_bytes(&sample_record());

    c.bench_function("decode_drifted", |b| {
        b.iter(|| decode_event(&bytes).unwrap_err());
    });
}

fn bench_decode_mappings(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_mappings");

    for count in [0usize, 10, 50, 100] {
        let mut record = sample_record();
        record.ticket_area_mappings = (0..count)
            .map(|i| TicketAreaMapping::new(format!("T{}", i % 5), format!("SECTION-{i}")))
            .collect();
        let bytes = EventEncoder::new(&record).encode().unwrap().bytes;

        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &bytes, |b, bytes| {
            b.iter(|| decode_event(bytes).unwrap());
        });
    }

    group.finish();
}

fn bench_decode_long_strings(c: &mut Criterion) {
    let mut record = sample_record();
    record.event_description_hash = "d".repeat(4096);
    record.performer_details_hash = "p".repeat(4096);
    let bytes = encode_unchecked(&record).bytes;
    let decoder = EventDecoder::with_limits(DecodeLimits::new(8192, 100));

    let mut group = c.benchmark_group("decode_long_strings");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("8k", |b| {
        b.iter(|| decoder.decode(&bytes).unwrap());
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_decode_sample,
    bench_decode_drifted,
    bench_decode_mappings,
    bench_decode_long_strings
);
criterion_main!(benches);
