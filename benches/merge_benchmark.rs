// SPDX-License-Identifier: MIT
//! Benchmark of merging a large asset library into a base movie

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use swf_merge::movie::{
    DefineBinaryData, DefineShape, DefineSprite, ExportAssets, Header, NamedId, PlaceObject,
};
use swf_merge::shape::{FillStyle, Matrix, Rect, Shape, ShapeStyles};
use swf_merge::{extract_exports, merge, remap_all, CharacterId, Composer, Movie, Tag};

/// Library of `count` bitmap-filled shapes, each wrapped in an exported sprite
fn create_library(count: u16) -> Movie {
    let mut tags = Vec::new();
    let mut assets = Vec::new();
    for i in 0..count {
        let data_id = i * 3 + 1;
        let shape_id = data_id + 1;
        let sprite_id = data_id + 2;
        tags.push(Tag::DefineBinaryData(DefineBinaryData {
            id: data_id,
            data: vec![0x42; 256],
        }));
        tags.push(Tag::DefineShape(DefineShape {
            id: shape_id,
            bounds: Rect::default(),
            shape: Shape {
                initial_styles: ShapeStyles {
                    fill: vec![FillStyle::Bitmap {
                        bitmap_id: data_id,
                        matrix: Matrix::default(),
                        repeating: false,
                        smoothed: true,
                    }],
                    line: vec![],
                },
                records: vec![],
            },
        }));
        tags.push(Tag::DefineSprite(DefineSprite {
            id: sprite_id,
            frame_count: 1,
            tags: vec![
                Tag::PlaceObject(PlaceObject {
                    depth: 1,
                    character_id: Some(shape_id),
                    ..PlaceObject::default()
                }),
                Tag::ShowFrame,
            ],
        }));
        assets.push(NamedId {
            name: format!("asset_{}", i),
            id: sprite_id,
        });
    }
    tags.push(Tag::ExportAssets(ExportAssets { assets }));
    Movie::new(Header::default(), tags)
}

fn create_base(count: CharacterId) -> Movie {
    let tags = (1..=count)
        .map(|id| {
            Tag::DefineBinaryData(DefineBinaryData {
                id,
                data: vec![0; 64],
            })
        })
        .collect();
    Movie::new(Header::default(), tags)
}

fn benchmark_extract_exports(c: &mut Criterion) {
    let library = Composer::new(create_library(1000));

    c.bench_function("extract_exports_1000", |b| {
        b.iter(|| extract_exports(black_box(&library)).unwrap())
    });
}

fn benchmark_remap(c: &mut Criterion) {
    let library = create_library(1000);

    c.bench_function("remap_all_3000_tags", |b| {
        b.iter(|| remap_all(black_box(&library.tags), |id| id + 5000))
    });
}

fn benchmark_merge(c: &mut Criterion) {
    let base = create_base(2000);
    let library = create_library(1000);

    c.bench_function("merge_1000_exports", |b| {
        b.iter(|| merge(black_box(&base), [library.clone()]).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_extract_exports,
    benchmark_remap,
    benchmark_merge
);
criterion_main!(benches);
