/// Errors that can occur during GPU rendering operations.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    #[error("device error: {0}")]
    DeviceError(String),

    #[error("invalid sample: {0}")]
    InvalidSample(String),

    #[error("readback error: {0}")]
    ReadbackError(String),

    #[error("staging worker error: {0}")]
    WorkerError(String),
}

impl From<wgpu::RequestDeviceError> for RendererError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RendererError::DeviceError(e.to_string())
    }
}

impl From<wgpu::BufferAsyncError> for RendererError {
    fn from(e: wgpu::BufferAsyncError) -> Self {
        RendererError::ReadbackError(e.to_string())
    }
}
