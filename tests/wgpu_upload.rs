// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Uploads against a real adapter.  Skips when the machine has none.
#![cfg(all(feature = "gpu_tests", feature = "backend_wgpu"))]

use texture_manager::imp::WgpuBackend;
use texture_manager::pixel_formats::ChannelOrder;
use texture_manager::pixel_source::DecodedBitmap;
use texture_manager::{Error, SampleParameters, TextureLoadParameters, TextureManager};

fn backend() -> Option<WgpuBackend> {
    let instance = wgpu::Instance::default();
    let adapter = match test_executors::spin_on(
        instance.request_adapter(&wgpu::RequestAdapterOptions::default()),
    ) {
        Ok(adapter) => adapter,
        Err(e) => {
            eprintln!("skipping: no adapter ({e})");
            return None;
        }
    };
    let (device, queue) =
        test_executors::spin_on(adapter.request_device(&wgpu::DeviceDescriptor::default()))
            .ok()?;
    Some(WgpuBackend::new(device, queue))
}

#[test]
fn uploads_rgba_and_bgra() {
    let Some(backend) = backend() else { return };
    let mut manager = TextureManager::new(backend);

    let rgba = DecodedBitmap::rgba(5, 3, vec![200; 5 * 3 * 4]).unwrap();
    let texture = manager.load(&rgba, &TextureLoadParameters::DEFAULT).unwrap();
    let gpu = manager.resource(&texture).unwrap();
    assert_eq!(gpu.texture().format(), wgpu::TextureFormat::Rgba8Unorm);
    assert_eq!((gpu.texture().width(), gpu.texture().height()), (5, 3));
    assert_eq!(gpu.texture().mip_level_count(), 1);
    assert_eq!(gpu.sampling(), SampleParameters::DEFAULT);

    let bgra = DecodedBitmap::bgra(2, 2, vec![7; 16]).unwrap();
    let texture = manager.load(&bgra, &TextureLoadParameters::NEAREST).unwrap();
    let gpu = manager.resource(&texture).unwrap();
    assert_eq!(gpu.texture().format(), wgpu::TextureFormat::Bgra8Unorm);
    assert_eq!(gpu.source_order(), ChannelOrder::Bgra);
    assert_eq!(gpu.sampling(), SampleParameters::NEAREST);

    assert_eq!(manager.texture_count(), 2);
}

#[test]
fn release_destroys_gpu_texture() {
    let Some(backend) = backend() else { return };
    let mut manager = TextureManager::new(backend);
    let bitmap = DecodedBitmap::rgba(1, 1, vec![0, 0, 0, 255]).unwrap();
    let texture = manager.load(&bitmap, &TextureLoadParameters::DEFAULT).unwrap();
    manager.release(&texture).unwrap();
    assert!(matches!(manager.resource(&texture), Err(Error::NotFound(_))));
    assert_eq!(manager.texture_count(), 0);
}
