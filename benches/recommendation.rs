//! Benchmark for the recommendation engine
//!
//! Covers the full path: raw object inspection, eligibility filtering,
//! topology grouping, and both query flavors.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use kube::core::DynamicObject;
use pool_recommender::{CapacityRecommender, DeviceAllocator, RaidGroupConfig, RaidType};
use serde_json::json;

const GIB: u64 = 1 << 30;

fn device_objects(nodes: usize, devices_per_node: usize) -> Vec<DynamicObject> {
    let mut objects = Vec::with_capacity(nodes * devices_per_node);
    for node in 0..nodes {
        for device in 0..devices_per_node {
            // Spread devices over a handful of capacity tiers and both media types
            let capacity = (50 + 50 * (device % 4) as u64) * GIB;
            let drive_type = if device % 3 == 0 { "SSD" } else { "HDD" };
            let object = serde_json::from_value(json!({
                "apiVersion": "openebs.io/v1alpha1",
                "kind": "BlockDevice",
                "metadata": {
                    "name": format!("bd-{}-{}", node, device),
                    "namespace": "openebs",
                    "labels": { "kubernetes.io/hostname": format!("node-{:03}", node) }
                },
                "spec": {
                    "capacity": {
                        "storage": capacity,
                        "physicalSectorSize": 4096
                    },
                    "details": { "deviceType": "disk", "driveType": drive_type },
                    "nodeAttributes": { "nodeName": format!("node-{:03}", node) }
                },
                "status": { "state": "Active", "claimState": "Unclaimed" }
            }))
            .expect("static fixture");
            objects.push(object);
        }
    }
    objects
}

fn bench_capacity_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommendation");
    let objects = device_objects(32, 16);
    group.throughput(Throughput::Elements(objects.len() as u64));

    group.bench_function("capacity_range_512_devices", |b| {
        let raid = RaidGroupConfig::new(RaidType::Mirror, 2).unwrap();
        b.iter(|| {
            let recommender =
                CapacityRecommender::new(black_box(&objects), raid).unwrap();
            black_box(recommender.range_by_class());
        });
    });

    group.finish();
}

fn bench_allocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommendation");
    let objects = device_objects(32, 16);
    group.throughput(Throughput::Elements(objects.len() as u64));

    group.bench_function("allocate_512_devices", |b| {
        let raid = RaidGroupConfig::new(RaidType::Mirror, 2).unwrap();
        b.iter(|| {
            let allocator =
                DeviceAllocator::new(black_box(&objects), raid, 200 * GIB).unwrap();
            black_box(allocator.allocate());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_capacity_range, bench_allocation);
criterion_main!(benches);
