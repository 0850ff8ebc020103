// Frame history for headless runs and tests

use crate::dataset::{Dataset, Highlight};
use crate::engine::FrameSink;
use crate::errors::SortvizError;

/// One presented frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub bars: Vec<u32>,
    pub highlights: Vec<Highlight>,
}

impl Frame {
    pub fn capture(dataset: &Dataset) -> Self {
        Frame {
            bars: dataset.bars().to_vec(),
            highlights: dataset.highlights().to_vec(),
        }
    }

    /// Estimate the memory usage of this frame in bytes
    pub fn estimated_size(&self) -> usize {
        self.bars.len() * std::mem::size_of::<u32>()
            + self.highlights.len() * std::mem::size_of::<Highlight>()
    }
}

/// Records every presented frame, up to a memory limit
#[derive(Debug)]
pub struct FrameHistory {
    frames: Vec<Frame>,
    max_memory: usize,
    current_memory: usize,
}

impl FrameHistory {
    pub fn new(max_memory: usize) -> Self {
        FrameHistory {
            frames: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// History without a practical memory limit
    pub fn unbounded() -> Self {
        Self::new(usize::MAX)
    }

    /// Add a frame to history
    pub fn push(&mut self, frame: Frame) -> Result<(), SortvizError> {
        let frame_size = frame.estimated_size();

        if self.current_memory.saturating_add(frame_size) > self.max_memory {
            return Err(SortvizError::FrameLimitExceeded {
                current: self.current_memory,
                limit: self.max_memory,
            });
        }

        self.current_memory += frame_size;
        self.frames.push(frame);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}

impl FrameSink for FrameHistory {
    type Error = SortvizError;

    fn present(&mut self, dataset: &Dataset) -> Result<(), SortvizError> {
        self.push(Frame::capture(dataset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_frames() {
        let mut dataset = Dataset::from_values(vec![2, 1]);
        let mut history = FrameHistory::unbounded();

        history.present(&dataset).unwrap();
        dataset.swap(0, 1);
        dataset.highlight(1, Highlight::Sorted);
        history.present(&dataset).unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history.get(0).unwrap().bars, vec![2, 1]);
        assert_eq!(history.last().unwrap().bars, vec![1, 2]);
        assert_eq!(history.last().unwrap().highlights[1], Highlight::Sorted);
        assert_eq!(history.memory_usage(), 2 * Frame::capture(&dataset).estimated_size());
    }

    #[test]
    fn test_memory_limit() {
        let dataset = Dataset::from_values(vec![1, 2, 3, 4]);
        let frame_size = Frame::capture(&dataset).estimated_size();
        let mut history = FrameHistory::new(frame_size * 2);

        history.present(&dataset).unwrap();
        history.present(&dataset).unwrap();
        let err = history.present(&dataset).unwrap_err();

        assert!(matches!(
            err,
            SortvizError::FrameLimitExceeded { current, limit }
                if current == frame_size * 2 && limit == frame_size * 2
        ));
        assert_eq!(history.len(), 2);
        assert_eq!(history.memory_limit(), frame_size * 2);
    }
}
