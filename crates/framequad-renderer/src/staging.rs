//! Background conversion of samples into upload-ready pixels.
//!
//! Each stream owns one worker thread so that pixel conversion never runs on
//! the render thread. Samples go in over one channel and staged frames come
//! back over another; the render thread only ever polls.

use std::sync::mpsc;
use std::thread::JoinHandle;

use tracing::{debug, warn};

use crate::gpu::RendererError;
use crate::sample::{PixelFormat, Sample};

/// Pixels in frame-texture order (BGRA), tightly packed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFrame {
    pub sample_id: u64,
    pub width: u32,
    pub height: u32,
    pub bgra: Vec<u8>,
}

/// Convert a sample to the layout of the frame texture.
pub fn stage(sample: &Sample) -> StagedFrame {
    let pixels = sample.frame.pixels();
    let bgra = match sample.frame.format() {
        PixelFormat::Bgra8 => pixels.to_vec(),
        PixelFormat::Rgba8 => {
            let mut out = pixels.to_vec();
            for px in out.chunks_exact_mut(4) {
                px.swap(0, 2);
            }
            out
        }
    };
    StagedFrame {
        sample_id: sample.sample_id,
        width: sample.width(),
        height: sample.height(),
        bgra,
    }
}

enum Message {
    Stage(Sample),
    Exit,
}

/// Handle to a stream's staging thread. Dropping it stops the thread.
pub struct Stager {
    sender: mpsc::Sender<Message>,
    receiver: mpsc::Receiver<StagedFrame>,
    handle: Option<JoinHandle<()>>,
}

impl Stager {
    pub fn spawn(stream_id: u64) -> Result<Self, RendererError> {
        let (sample_sender, sample_receiver) = mpsc::channel::<Message>();
        let (frame_sender, frame_receiver) = mpsc::channel();

        let handle = std::thread::Builder::new()
            .name(format!("framequad-stage-{stream_id}"))
            .spawn(move || {
                for msg in sample_receiver.iter() {
                    match msg {
                        Message::Stage(sample) => {
                            if frame_sender.send(stage(&sample)).is_err() {
                                return;
                            }
                        }
                        Message::Exit => return,
                    }
                }
            })
            .map_err(|e| RendererError::WorkerError(e.to_string()))?;

        debug!("spawned staging worker for stream {stream_id}");
        Ok(Self {
            sender: sample_sender,
            receiver: frame_receiver,
            handle: Some(handle),
        })
    }

    /// Queue a sample for conversion.
    pub fn submit(&self, sample: Sample) {
        let sample_id = sample.sample_id;
        if self.sender.send(Message::Stage(sample)).is_err() {
            warn!("staging worker gone, dropping sample {sample_id}");
        }
    }

    /// Most recent finished frame, discarding any older ones. Never blocks.
    pub fn latest(&self) -> Option<StagedFrame> {
        self.receiver.try_iter().last()
    }
}

impl Drop for Stager {
    fn drop(&mut self) {
        // No worker thread outlives its stream.
        if self.sender.send(Message::Exit).is_err() {
            debug!("staging worker already exited");
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("staging worker panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{Frame, SampleFeed};
    use std::time::Duration;

    #[test]
    fn stage_keeps_bgra() {
        let mut feed = SampleFeed::with_stream_id(1);
        let frame = Frame::new(vec![1, 2, 3, 4, 5, 6, 7, 8], 2, 1, PixelFormat::Bgra8).unwrap();
        let staged = stage(&feed.push(frame));
        assert_eq!(staged.bgra, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!((staged.width, staged.height), (2, 1));
    }

    #[test]
    fn stage_swizzles_rgba() {
        let mut feed = SampleFeed::with_stream_id(1);
        let frame = Frame::new(vec![1, 2, 3, 4, 5, 6, 7, 8], 1, 2, PixelFormat::Rgba8).unwrap();
        let staged = stage(&feed.push(frame));
        assert_eq!(staged.bgra, vec![3, 2, 1, 4, 7, 6, 5, 8]);
    }

    #[test]
    fn worker_returns_staged_frames_in_order() {
        let stager = Stager::spawn(9).unwrap();
        let mut feed = SampleFeed::with_stream_id(9);
        for _ in 0..3 {
            stager.submit(feed.push(Frame::solid(2, 2, [0, 0, 255, 255]).unwrap()));
        }
        let ids: Vec<u64> = (0..3)
            .map(|_| {
                stager
                    .receiver
                    .recv_timeout(Duration::from_secs(5))
                    .unwrap()
                    .sample_id
            })
            .collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn latest_keeps_only_newest() {
        let stager = Stager::spawn(3).unwrap();
        let mut feed = SampleFeed::with_stream_id(3);
        for _ in 0..4 {
            stager.submit(feed.push(Frame::solid(1, 1, [0, 0, 0, 255]).unwrap()));
        }
        // The worker handles messages in order, so once the last one is
        // staged everything before it is too.
        let mut newest = None;
        for _ in 0..500 {
            if let Some(frame) = stager.latest() {
                newest = Some(frame.sample_id);
                if frame.sample_id == 3 {
                    break;
                }
            }
            std::thread::sleep(Duration::from_millis(2));
        }
        assert_eq!(newest, Some(3));
        assert!(stager.latest().is_none());
    }

    #[test]
    fn latest_is_none_before_any_submit() {
        let stager = Stager::spawn(4).unwrap();
        assert!(stager.latest().is_none());
    }

    #[test]
    fn drop_after_worker_exit_is_quiet() {
        let mut stager = Stager::spawn(6).unwrap();
        // With nobody receiving, the worker stops after its next frame.
        stager.receiver = mpsc::channel().1;
        let mut feed = SampleFeed::with_stream_id(6);
        stager.submit(feed.push(Frame::solid(1, 1, [0, 0, 0, 255]).unwrap()));

        let handle = stager.handle.as_ref().unwrap();
        for _ in 0..500 {
            if handle.is_finished() {
                break;
            }
            std::thread::sleep(Duration::from_millis(2));
        }
        assert!(handle.is_finished());
        assert!(stager.sender.send(Message::Exit).is_err());
        drop(stager);
    }

    #[test]
    fn drop_joins_worker() {
        let stager = Stager::spawn(5).unwrap();
        drop(stager);
    }
}
