use crate::Result;
use crate::transcript::Segment;

/// A cue-oriented encoder that receives segments one at a time.
///
/// Callers write every segment in order and then call `close()` exactly once they're done;
/// `close()` is where encoders emit any trailing structure and flush.
pub trait SegmentEncoder {
    fn write_segment(&mut self, seg: &Segment) -> Result<()>;
    fn close(&mut self) -> Result<()>;

    /// Write every segment in order.
    fn write_all_segments(&mut self, segments: &[Segment]) -> Result<()> {
        for seg in segments {
            self.write_segment(seg)?;
        }
        Ok(())
    }
}
