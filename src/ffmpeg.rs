use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result, anyhow};
use log::{debug, warn};

/// Ask ffprobe for the container duration of a video, in seconds.
pub fn probe_duration(path: &Path) -> Result<f64> {
    let output = Command::new("ffprobe")
        .args(["-v", "error"])
        .args(["-show_entries", "format=duration"])
        .args(["-of", "default=noprint_wrappers=1:nokey=1"])
        .arg(path)
        .output()
        .context("Failed to start ffprobe")?;

    if !output.status.success() {
        return Err(anyhow!(
            "ffprobe failed for {:?}: {}",
            path,
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }

    let text = String::from_utf8_lossy(&output.stdout);
    text.trim()
        .parse::<f64>()
        .with_context(|| format!("Unexpected ffprobe output for {:?}: {:?}", path, text.trim()))
}

/// Probe every listed video on a background thread. Results arrive as
/// `(slide index, seconds)` in whatever order ffprobe finishes them.
pub fn spawn_probes(videos: Vec<(usize, std::path::PathBuf)>) -> Receiver<(usize, f64)> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for (index, path) in videos {
            match probe_duration(&path) {
                Ok(seconds) => {
                    if tx.send((index, seconds)).is_err() {
                        return; // Host went away
                    }
                }
                Err(e) => warn!("Could not measure slide {}: {:#}", index, e),
            }
        }
    });
    rx
}

/// A running ffmpeg process decoding one video into raw RGBA frames.
///
/// Frames go through a two-slot channel: when the host stops taking them the
/// reader thread blocks, ffmpeg blocks on its pipe, and decoding pauses.
pub struct VideoDecoder {
    process: Child,
    frames: Option<Receiver<Vec<u8>>>,
    reader: Option<JoinHandle<()>>,
}

impl VideoDecoder {
    pub fn spawn(path: &Path, width: i32, height: i32, fps: u32) -> std::io::Result<VideoDecoder> {
        let mut process = Command::new("ffmpeg")
            .stdout(Stdio::piped())
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .args(["-loglevel", "error"])
            .arg("-i")
            .arg(path)
            .args(["-an"])
            .args(["-vf", &format!("scale={}:{}", width, height)])
            .args(["-r", &format!("{}", fps)])
            .args(["-f", "rawvideo"])
            .args(["-pix_fmt", "rgba"])
            .arg("-")
            .spawn()?;

        let mut stdout = process
            .stdout
            .take()
            .ok_or_else(|| std::io::Error::other("ffmpeg stdout not captured"))?;

        let frame_len = (width * height * 4) as usize; // 4 bytes per pixel (RGBA)
        let (tx, rx): (SyncSender<Vec<u8>>, Receiver<Vec<u8>>) = mpsc::sync_channel(2);
        let reader = thread::spawn(move || {
            loop {
                let mut frame = vec![0u8; frame_len];
                if stdout.read_exact(&mut frame).is_err() {
                    break; // End of stream or process killed
                }
                if tx.send(frame).is_err() {
                    break;
                }
            }
        });

        debug!("Started decoder for {:?}", path);
        Ok(VideoDecoder { process, frames: Some(rx), reader: Some(reader) })
    }

    /// Next decoded frame, if one is ready.
    pub fn next_frame(&self) -> Option<Vec<u8>> {
        self.frames.as_ref()?.try_recv().ok()
    }
}

impl Drop for VideoDecoder {
    fn drop(&mut self) {
        // Unblock the reader first, then stop ffmpeg so the pipe closes
        self.frames = None;
        if let Err(e) = self.process.kill() {
            debug!("ffmpeg already exited: {}", e);
        }
        let _ = self.process.wait();
        if let Some(reader) = self.reader.take() {
            let _ = reader.join();
        }
    }
}
