// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Using a manager away from its GPU thread must panic rather than touch state.

use std::thread;
use texture_manager::imp::NopBackend;
use texture_manager::pixel_source::DecodedBitmap;
use texture_manager::{TextureLoadParameters, TextureManager};

#[test]
fn load_off_thread_panics() {
    let mut manager = TextureManager::new(NopBackend::new());
    let result = thread::spawn(move || {
        let bitmap = DecodedBitmap::rgba(1, 1, vec![0; 4]).unwrap();
        let _ = manager.load(&bitmap, &TextureLoadParameters::DEFAULT);
    })
    .join();
    assert!(result.is_err());
}

#[test]
fn off_thread_panic_happens_before_any_backend_call() {
    let manager = TextureManager::new(NopBackend::new());
    let owner = manager.gpu_thread().clone();
    let manager = std::sync::Arc::new(std::sync::Mutex::new(manager));

    let moved = manager.clone();
    let result = thread::spawn(move || {
        let mut manager = moved.lock().unwrap_or_else(|e| e.into_inner());
        assert!(!manager.gpu_thread().is_current());
        let bitmap = DecodedBitmap::rgba(1, 1, vec![0; 4]).unwrap();
        let _ = manager.load(&bitmap, &TextureLoadParameters::DEFAULT);
    })
    .join();
    assert!(result.is_err());

    assert!(owner.is_current());
    let manager = manager.lock().unwrap_or_else(|e| e.into_inner());
    assert_eq!(manager.backend().call_count(), 0);
    assert_eq!(manager.texture_count(), 0);
}

#[test]
fn release_off_thread_panics() {
    let mut manager = TextureManager::new(NopBackend::new());
    let bitmap = DecodedBitmap::rgba(1, 1, vec![0; 4]).unwrap();
    let texture = manager.load(&bitmap, &TextureLoadParameters::DEFAULT).unwrap();
    let result = thread::spawn(move || {
        let _ = manager.release(&texture);
    })
    .join();
    assert!(result.is_err());
}

#[test]
fn resource_off_thread_panics() {
    let mut manager = TextureManager::new(NopBackend::new());
    let bitmap = DecodedBitmap::rgba(1, 1, vec![0; 4]).unwrap();
    let texture = manager.load(&bitmap, &TextureLoadParameters::DEFAULT).unwrap();
    let result = thread::spawn(move || {
        let _ = manager.resource(&texture).map(|t| t.width);
    })
    .join();
    assert!(result.is_err());
}

#[test]
fn texture_count_off_thread_panics() {
    let manager = TextureManager::new(NopBackend::new());
    let result = thread::spawn(move || manager.texture_count()).join();
    assert!(result.is_err());
}
