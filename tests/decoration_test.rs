use std::f32::consts::PI;

use text_scatter::{
    Rad, Vector3,
    data_structures::{
        decoration::{BatchStyle, DecorationKind, OpacityRange, ScaleRange, build_batch},
        instance::Instance,
    },
    scatter::{ScatterError, ScatterVolume},
};

use crate::common::test_utils::{ConstantRng, seeded};

mod common;

fn donut_style() -> BatchStyle {
    BatchStyle {
        kind: DecorationKind::Donut,
        scale: ScaleRange::new(0.05, 0.5).unwrap(),
        opacity: OpacityRange::new(0.6, 1.0).unwrap(),
    }
}

#[test]
fn batch_has_requested_size_and_ranges() {
    let volume = ScatterVolume::new(5.0, 1.3).unwrap();
    let batch = build_batch(100, &volume, &donut_style(), &mut seeded(11)).unwrap();

    assert_eq!(batch.len(), 100);
    assert_eq!(batch.kind, DecorationKind::Donut);
    for decoration in &batch.decorations {
        assert_eq!(decoration.kind, DecorationKind::Donut);
        assert!(volume.contains(decoration.position));
        assert!((0.05..0.5).contains(&decoration.scale));
        assert!((0.6..1.0).contains(&decoration.opacity));
        assert!((0.0..PI).contains(&decoration.rotation_x.0));
        assert!((0.0..PI).contains(&decoration.rotation_y.0));
    }
}

fn distinct(values: impl Iterator<Item = f32>) -> usize {
    let mut values: Vec<f32> = values.collect();
    values.sort_by(|a, b| a.total_cmp(b));
    values.dedup();
    values.len()
}

#[test]
fn every_decoration_gets_its_own_draws() {
    let volume = ScatterVolume::new(5.0, 1.3).unwrap();
    let batch = build_batch(100, &volume, &donut_style(), &mut seeded(5)).unwrap();
    let first = &batch.decorations[0];

    assert!(distinct(batch.decorations.iter().map(|d| d.scale)) > 90);
    assert!(distinct(batch.decorations.iter().map(|d| d.opacity)) > 90);
    assert!(distinct(batch.decorations.iter().map(|d| d.rotation_x.0)) > 90);
    assert!(distinct(batch.decorations.iter().map(|d| d.rotation_y.0)) > 90);
    assert!(
        batch.decorations[1..]
            .iter()
            .all(|d| d.position != first.position)
    );
}

#[test]
fn empty_batch_draws_nothing() {
    let volume = ScatterVolume::new(5.0, 1.3).unwrap();
    let batch = build_batch(0, &volume, &donut_style(), &mut seeded(0)).unwrap();
    assert!(batch.is_empty());
    assert_eq!(batch.rejected_draws, 0);
}

#[test]
fn batch_propagates_exhaustion() {
    let volume = ScatterVolume::new(5.0, 1.3).unwrap().with_max_attempts(10);
    let err = build_batch(3, &volume, &donut_style(), &mut ConstantRng(0x8000_0000)).unwrap_err();
    assert_eq!(err, ScatterError::SamplingExhausted { attempts: 10 });
}

#[test]
fn scale_range_rejects_non_positive_or_empty_intervals() {
    for (min, max) in [(0.0, 0.5), (-0.1, 0.5), (0.5, 0.5), (0.5, 0.1), (0.1, f32::INFINITY)] {
        assert_eq!(
            ScaleRange::new(min, max),
            Err(ScatterError::InvalidScaleRange { min, max })
        );
    }
    assert!(ScaleRange::new(0.02, 0.2).is_ok());
}

#[test]
fn opacity_range_stays_within_unit_interval() {
    assert!(OpacityRange::new(0.0, 1.0).is_ok());
    assert!(OpacityRange::new(-0.1, 1.0).is_err());
    assert!(OpacityRange::new(0.6, 1.2).is_err());
    assert!(OpacityRange::new(0.6, 0.6).is_err());
}

#[test]
fn decoration_converts_to_uniformly_scaled_instance() {
    let volume = ScatterVolume::new(5.0, 1.3).unwrap();
    let batch = build_batch(1, &volume, &donut_style(), &mut seeded(9)).unwrap();
    let decoration = &batch.decorations[0];
    let instance = decoration.to_instance();

    assert_eq!(instance.position, decoration.position);
    assert_eq!(
        instance.scale,
        Vector3::new(decoration.scale, decoration.scale, decoration.scale)
    );
    assert_eq!(batch.instances(), vec![instance.clone()]);
    let raw = batch.to_raw();
    assert_eq!(raw.len(), 1);
    assert_eq!(raw[0], instance.to_raw());
    assert_eq!(raw[0].handedness, 1.0);
    // translation sits in the last column of the model matrix
    assert_eq!(raw[0].model[3][0], decoration.position.x);
    assert_eq!(raw[0].model[3][1], decoration.position.y);
    assert_eq!(raw[0].model[3][2], decoration.position.z);
}

#[test]
fn instance_without_rotation_is_translation_times_scale() {
    let instance = Instance::from_placement(Vector3::new(1.0, 2.0, 3.0), Rad(0.0), Rad(0.0), 0.5);
    let m = instance.to_matrix();
    assert_eq!(m.x.x, 0.5);
    assert_eq!(m.y.y, 0.5);
    assert_eq!(m.z.z, 0.5);
    assert_eq!(m.w, text_scatter::Vector4::new(1.0, 2.0, 3.0, 1.0));
    assert_eq!(Instance::from(Vector3::new(1.0, 2.0, 3.0)).scale, Vector3::new(1.0, 1.0, 1.0));
}
