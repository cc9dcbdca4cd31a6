//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Benchmarks for transcript appends and replay

use bytes::BytesMut;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ircview_transcript::{ScrollbackCodec, ScrollbackLine, Transcript, TranscriptConfig};
use std::hint::black_box;
use tokio_util::codec::Encoder;

const LINE: &str = "\x0302<alice>\x0f\t\x02hey\x02 look at https://example.com/page and /tmp/log";

fn scrollback(lines: usize) -> Vec<u8> {
    let mut codec = ScrollbackCodec::new();
    let mut dst = BytesMut::new();
    for index in 0..lines {
        codec
            .encode(ScrollbackLine::new(1_700_000_000 + index as i64, LINE), &mut dst)
            .unwrap();
    }
    dst.to_vec()
}

// Benchmark appending lines
fn bench_print_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("print_text");

    for stamp in [false, true] {
        group.bench_with_input(BenchmarkId::from_parameter(stamp), &stamp, |b, &stamp| {
            let config = TranscriptConfig::default()
                .with_stamp_text(stamp)
                .with_max_lines(Some(1000));
            let mut transcript = Transcript::new(config).unwrap();
            b.iter(|| transcript.print_text(black_box(LINE), None));
        });
    }
    group.finish();
}

// Benchmark replaying stored scrollback
fn bench_replay_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay_bytes");

    for lines in [10, 100, 1000].iter() {
        let data = scrollback(*lines);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &data, |b, data| {
            b.iter(|| {
                let config = TranscriptConfig::default();
                let mut transcript = Transcript::new(config).unwrap();
                black_box(transcript.replay_bytes(black_box(data)).unwrap())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_print_text, bench_replay_bytes);
criterion_main!(benches);
