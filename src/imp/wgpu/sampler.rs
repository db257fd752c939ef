// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::load_parameters::{SampleParameters, TextureWrapMode};
use wgpu::{AddressMode, FilterMode, SamplerDescriptor};

pub(super) fn filter_mode(sampling: SampleParameters) -> FilterMode {
    if sampling.filter {
        FilterMode::Linear
    } else {
        FilterMode::Nearest
    }
}

pub(super) fn address_mode(wrap_mode: TextureWrapMode) -> AddressMode {
    match wrap_mode {
        //ClampToBorder needs a device feature, so "none" clamps to the edge
        TextureWrapMode::None => AddressMode::ClampToEdge,
        TextureWrapMode::Repeat => AddressMode::Repeat,
        TextureWrapMode::MirroredRepeat => AddressMode::MirrorRepeat,
        TextureWrapMode::ClampToEdge => AddressMode::ClampToEdge,
    }
}

pub(super) fn descriptor(sampling: SampleParameters, label: Option<&str>) -> SamplerDescriptor<'_> {
    let filter = filter_mode(sampling);
    let address = address_mode(sampling.wrap_mode);
    SamplerDescriptor {
        label,
        address_mode_u: address,
        address_mode_v: address,
        address_mode_w: address,
        mag_filter: filter,
        min_filter: filter,
        compare: None,
        anisotropy_clamp: 1,
        border_color: None,
        //single mip level, so mipmap_filter and lod clamps keep their defaults
        ..Default::default()
    }
}
