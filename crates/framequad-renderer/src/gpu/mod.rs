mod context;
mod offscreen;
mod types;

pub use context::*;
pub use offscreen::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_device_display() {
        let err = RendererError::DeviceError("out of memory".to_string());
        assert_eq!(err.to_string(), "device error: out of memory");
    }

    #[test]
    fn renderer_error_invalid_sample_display() {
        let err = RendererError::InvalidSample("0x0 frame".to_string());
        assert_eq!(err.to_string(), "invalid sample: 0x0 frame");
    }

    #[test]
    fn renderer_error_readback_display() {
        let err = RendererError::ReadbackError("map failed".to_string());
        assert_eq!(err.to_string(), "readback error: map failed");
    }

    #[test]
    fn renderer_error_worker_display() {
        let err = RendererError::WorkerError("spawn failed".to_string());
        assert_eq!(err.to_string(), "staging worker error: spawn failed");
    }

    #[test]
    fn padded_row_is_aligned() {
        assert_eq!(padded_bytes_per_row(1), 256);
        assert_eq!(padded_bytes_per_row(64), 256);
        assert_eq!(padded_bytes_per_row(65), 512);
        assert_eq!(padded_bytes_per_row(1920), 7680);
    }

    #[test]
    fn strip_padding_keeps_visible_bytes() {
        let width = 2;
        let padded = padded_bytes_per_row(width) as usize;
        let mut data = vec![0xAAu8; padded * 2];
        data[..8].copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
        data[padded..padded + 8].copy_from_slice(&[9, 10, 11, 12, 13, 14, 15, 16]);
        let out = strip_row_padding(&data, width, 2);
        assert_eq!(out, (1..=16).collect::<Vec<u8>>());
    }
}
