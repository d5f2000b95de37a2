use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mzqc::controlled_vocabulary::{file_terms, qc_terms, unit_terms, ControlledVocabulary, CvParameter};
use mzqc::document::{AnalysisSoftware, BaseQuality, InputFile, Metadata, MzQcDocument};
use mzqc::reader::parse_mzqc_str;
use mzqc::value::Table;
use mzqc::writer::{MzQcWriter, WriterConfig};

/// Build a document with `runs` run qualities of mixed metric shapes
fn create_test_document(runs: usize) -> MzQcDocument {
    let software = AnalysisSoftware::new(
        CvParameter::new("MS:1003162", "PTX-QC"),
        "1.0.0",
        "https://github.com/cbielow/PTXQC/",
    );

    let mut document = MzQcDocument::new()
        .with_controlled_vocabulary(ControlledVocabulary::psi_ms("4.1.129"))
        .with_controlled_vocabulary(ControlledVocabulary::unit_ontology());

    for i in 0..runs {
        let name = format!("run_{:04}.mzML", i);
        let metadata = Metadata::new()
            .with_label(&format!("run_{:04}", i))
            .with_input_file(
                InputFile::new(&name, &format!("file:///data/{}", name), file_terms::mzml_format())
                    .with_property(file_terms::completion_time("2020-12-01T11:56:34")),
            )
            .with_software(software.clone());

        let rt: Vec<f64> = (0..200).map(|j| j as f64 * 0.5).collect();
        let mut charges = Table::new();
        charges.insert("MS:1000041".to_string(), vec![1.0, 2.0, 3.0, 4.0]);
        charges.insert("UO:0000191".to_string(), vec![0.01, 0.65, 0.27, 0.07]);

        let quality = BaseQuality::new(metadata)
            .with_metric(qc_terms::ms1_spectra_count(10_000 + i as i64))
            .with_metric(qc_terms::ms2_spectra_count(60_000 + i as i64))
            .with_metric(qc_terms::chromatography_duration(2400.0 + i as f64))
            .with_metric(
                CvParameter::new("MS:4000070", "retention time acquisition range")
                    .with_value(rt)
                    .with_unit(unit_terms::second()),
            )
            .with_metric(CvParameter::new("MS:4000063", "MS2 known precursor charges fractions").with_value(charges));

        document = document.with_run_quality(quality);
    }

    document
}

/// Benchmark parsing mzQC text into a document
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for runs in [10, 100, 1000] {
        let text = MzQcWriter::new(WriterConfig::compact())
            .to_string(&create_test_document(runs))
            .unwrap();

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(format!("{}runs", runs)), &text, |b, text| {
            b.iter(|| {
                let document = parse_mzqc_str(black_box(text)).unwrap();
                black_box(document);
            });
        });
    }

    group.finish();
}

/// Benchmark serializing a document to text
fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");

    for runs in [10, 100, 1000] {
        let document = create_test_document(runs);

        for (label, config) in [("pretty", WriterConfig::default()), ("compact", WriterConfig::compact())] {
            let writer = MzQcWriter::new(config);
            group.bench_with_input(
                BenchmarkId::new(label, format!("{}runs", runs)),
                &document,
                |b, document| {
                    b.iter(|| {
                        let text = writer.to_string(black_box(document)).unwrap();
                        black_box(text);
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_emit);
criterion_main!(benches);
