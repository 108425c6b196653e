//! Render configuration from `key:value` tokens

use log::warn;

use crate::blue_noise::SamplePattern;
use crate::quadtree::QuadtreeConfig;
use crate::{Error, Result};

/// Options controlling acceleration and sampling
#[derive(Debug,Copy,Clone,PartialEq,Default)]
pub struct RenderConfig {
    /// Samples per pixel
    pub pattern: SamplePattern,
    /// Device space translation applied to the whole scene
    pub tx: f64,
    pub ty: f64,
    /// Worker threads, 0 for the rayon default
    pub threads: usize,
    /// Overrides the depth derived from the viewport
    pub max_depth: Option<usize>,
    /// Overrides the minimum segment count for splitting a cell
    pub min_segments: Option<usize>,
}

fn parse<T: std::str::FromStr>(token: &str, value: &str) -> Result<T>
    where T::Err: std::fmt::Display
{
    value.trim().parse::<T>().map_err(|e| Error::Config {
        token: token.to_string(),
        reason: e.to_string(),
    })
}

impl RenderConfig {
    /// Parse tokens such as `-pattern:16` or `-j:4`
    ///
    /// Tokens are split at the first `:`.  Unknown keys are ignored.
    pub fn from_args<I, S>(args: I) -> Result<Self>
        where I: IntoIterator<Item=S>,
              S: AsRef<str>
    {
        let mut cfg = RenderConfig::default();
        for arg in args {
            let token = arg.as_ref();
            let (key, value) = match token.find(':') {
                Some(i) => (&token[..i], &token[i+1..]),
                None => (token, ""),
            };
            match key {
                "-pattern" => {
                    let n : usize = parse(token, value)?;
                    cfg.pattern = SamplePattern::with_samples(n).map_err(|_| Error::Config {
                        token: token.to_string(),
                        reason: format!("no blue noise pattern with {} samples", n),
                    })?;
                },
                "-tx" => cfg.tx = parse(token, value)?,
                "-ty" => cfg.ty = parse(token, value)?,
                "-j" => cfg.threads = parse(token, value)?,
                "-depth" => cfg.max_depth = Some(parse(token, value)?),
                "-min_seg" => cfg.min_segments = Some(parse(token, value)?),
                _ => warn!("ignoring unknown option {:?}", token),
            }
        }
        Ok(cfg)
    }
    /// Subdivision limits for a viewport, with overrides applied
    pub fn quadtree(&self, width: usize, height: usize) -> QuadtreeConfig {
        let mut q = QuadtreeConfig::for_viewport(width, height);
        if let Some(d) = self.max_depth {
            q.max_depth = d;
        }
        if let Some(m) = self.min_segments {
            q.min_segments = m;
        }
        q
    }
}
