//! Cross-checks between the JSON scene description and the binary blob
//!
//! A GLB whose declared offsets disagree with its BIN chunk still parses as
//! JSON but is rejected or misread by viewers, so assembly refuses to emit it.

use crate::error::GlbError;
use gltf_json as json;
use gltf_json::accessor::{ComponentType, Type};
use gltf_json::validation::Checked::Valid;

/// Size in bytes of one component
pub fn component_size(component_type: ComponentType) -> u64 {
    match component_type {
        ComponentType::I8 | ComponentType::U8 => 1,
        ComponentType::I16 | ComponentType::U16 => 2,
        ComponentType::U32 | ComponentType::F32 => 4,
    }
}

/// Number of components per element
pub fn component_count(type_: Type) -> u64 {
    match type_ {
        Type::Scalar => 1,
        Type::Vec2 => 2,
        Type::Vec3 => 3,
        Type::Vec4 | Type::Mat2 => 4,
        Type::Mat3 => 9,
        Type::Mat4 => 16,
    }
}

/// Bytes an accessor reads from its view, starting at its own byte offset
pub fn accessor_byte_length(index: usize, accessor: &json::Accessor) -> Result<u64, GlbError> {
    let (Valid(component_type), Valid(type_)) = (&accessor.component_type, &accessor.type_) else {
        return Err(GlbError::InvalidAccessorType(index));
    };
    accessor
        .count
        .0
        .checked_mul(component_size(component_type.0))
        .and_then(|n| n.checked_mul(component_count(*type_)))
        .ok_or(GlbError::AccessorLengthOverflow(index))
}

/// `min`/`max` must be arrays of numbers; non-finite floats serialize as null
fn bounds_are_numeric(bounds: Option<&json::Value>) -> bool {
    match bounds {
        None => true,
        Some(json::Value::Array(values)) => values.iter().all(json::Value::is_number),
        Some(_) => false,
    }
}

/// Verify that `root` describes `bin` exactly.
///
/// Buffer 0 must be exactly as long as `bin`, every view must lie inside
/// it, and every accessor must fit inside its view.
pub fn validate_layout(root: &json::Root, bin: &[u8]) -> Result<(), GlbError> {
    let buffer = root.buffers.first().ok_or(GlbError::MissingBuffer)?;
    let buffer_length = buffer.byte_length.0;
    let actual = bin.len() as u64;
    if buffer_length != actual {
        return Err(GlbError::BufferLengthMismatch {
            declared: buffer_length,
            actual,
        });
    }

    for (index, view) in root.buffer_views.iter().enumerate() {
        let start = view.byte_offset.as_ref().map_or(0, |o| o.0);
        let end = start.checked_add(view.byte_length.0).unwrap_or(u64::MAX);
        if end > buffer_length {
            return Err(GlbError::ViewOutOfBounds {
                view: index,
                start,
                end,
                buffer_length,
            });
        }
    }

    for (index, accessor) in root.accessors.iter().enumerate() {
        let bounds = [accessor.min.as_ref(), accessor.max.as_ref()];
        if !bounds.into_iter().all(bounds_are_numeric) {
            return Err(GlbError::NonNumericBounds(index));
        }
        let Some(view_index) = &accessor.buffer_view else {
            continue;
        };
        let view = root
            .buffer_views
            .get(view_index.value())
            .ok_or(GlbError::MissingView {
                accessor: index,
                view: view_index.value(),
            })?;
        let offset = accessor.byte_offset.as_ref().map_or(0, |o| o.0);
        let required = offset
            .checked_add(accessor_byte_length(index, accessor)?)
            .ok_or(GlbError::AccessorLengthOverflow(index))?;
        let available = view.byte_length.0;
        if required > available {
            return Err(GlbError::AccessorOverflow {
                accessor: index,
                required,
                available,
            });
        }
    }

    Ok(())
}
