use std::collections::HashSet;

use rayon::prelude::*;

use crate::{
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{CapsyncError, CapsyncResult},
    },
    model::{context::CaptionContext, state::CaptionState},
    render::{
        fingerprint::{FrameFingerprint, fingerprint_presentation},
        frame::{FrameRenderer, VideoConfig, visible_phrase},
        presentation::FramePresentation,
    },
};

/// Render a range of frames (inclusive start, exclusive end) on the calling thread.
pub fn render_frames(
    state: &CaptionState,
    range: FrameRange,
    video: &VideoConfig,
) -> CapsyncResult<Vec<Option<FramePresentation>>> {
    render_frames_with_stats(state, range, video, &RenderThreading::default())
        .map(|(frames, _)| frames)
}

#[derive(Clone, Debug)]
pub struct RenderThreading {
    pub parallel: bool,
    pub chunk_size: usize,
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RenderStats {
    pub frames_total: u64,
    /// Frames with a visible phrase.
    pub frames_visible: u64,
    /// Frames whose fingerprint matches the frame before them.
    pub frames_unchanged: u64,
    /// Distinct fingerprints across the range.
    pub frames_distinct: u64,
}

/// Render a range of frames, optionally fanning chunks out over a rayon pool.
///
/// Output order always follows the range, regardless of threading.
#[tracing::instrument(skip(state, video))]
pub fn render_frames_with_stats(
    state: &CaptionState,
    range: FrameRange,
    video: &VideoConfig,
    threading: &RenderThreading,
) -> CapsyncResult<(Vec<Option<FramePresentation>>, RenderStats)> {
    if range.is_empty() {
        return Err(CapsyncError::validation("render range must be non-empty"));
    }

    let ctx = CaptionContext::new(state, video.canvas);
    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);

    if !threading.parallel {
        for f in range.start.0..range.end.0 {
            out.push(render_one(state, FrameIndex(f), video, &ctx));
        }
    } else {
        let pool = build_thread_pool(threading.threads)?;
        let mut chunk_start = range.start.0;
        while chunk_start < range.end.0 {
            let chunk_end = (chunk_start + chunk_size).min(range.end.0);
            let chunk = FrameRange::new(FrameIndex(chunk_start), FrameIndex(chunk_end))
                .map_err(|e| CapsyncError::evaluation(format!("invalid chunk range: {e}")))?;
            let mut frames = pool.install(|| {
                (chunk.start.0..chunk.end.0)
                    .into_par_iter()
                    .map(|f| render_one(state, FrameIndex(f), video, &ctx))
                    .collect::<Vec<_>>()
            });
            out.append(&mut frames);
            chunk_start = chunk_end;
        }
    }

    let stats = collect_stats(&out);
    tracing::debug!(
        total = stats.frames_total,
        visible = stats.frames_visible,
        unchanged = stats.frames_unchanged,
        distinct = stats.frames_distinct,
        "rendered frame range"
    );
    Ok((out, stats))
}

fn render_one(
    state: &CaptionState,
    frame: FrameIndex,
    video: &VideoConfig,
    ctx: &CaptionContext,
) -> Option<FramePresentation> {
    let group = visible_phrase(state, frame, video.fps)?;
    FrameRenderer::render_phrase(group, frame, video, ctx)
}

fn collect_stats(frames: &[Option<FramePresentation>]) -> RenderStats {
    let mut stats = RenderStats::default();
    let mut seen = HashSet::<FrameFingerprint>::new();
    let mut prev: Option<FrameFingerprint> = None;
    for frame in frames {
        let fp = fingerprint_presentation(frame.as_ref());
        stats.frames_total += 1;
        if frame.is_some() {
            stats.frames_visible += 1;
        }
        if prev == Some(fp) {
            stats.frames_unchanged += 1;
        }
        seen.insert(fp);
        prev = Some(fp);
    }
    stats.frames_distinct = seen.len() as u64;
    stats
}

fn build_thread_pool(threads: Option<usize>) -> CapsyncResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(CapsyncError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| CapsyncError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
