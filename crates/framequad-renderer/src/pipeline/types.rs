use framequad_common::Rect;

use crate::sample::Sample;

/// A sample and where to put it, in target pixels.
#[derive(Debug, Clone)]
pub struct SampleDraw {
    pub sample: Sample,
    pub bounds: Rect,
}
