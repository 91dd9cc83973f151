//! Built-in feature and image track handlers.

use crate::error::Result;

use super::{HandlerContext, TrackHandler, TrackKind};

/// File each track writes per reference sequence to describe its data.
pub const TRACK_DATA_FILE: &str = "trackData.json";

fn with_default_key(mut context: HandlerContext) -> HandlerContext {
    if context.key.is_empty() {
        context.key = context.label.clone();
    }
    context
}

/// Handler for feature tracks.
#[derive(Debug, Clone)]
pub struct FeatureTrack {
    context: HandlerContext,
}

impl FeatureTrack {
    pub const TYPE_NAME: &'static str = "FeatureTrack";

    pub fn new(context: HandlerContext) -> Self {
        Self {
            context: with_default_key(context),
        }
    }

    /// Factory registered under [`Self::TYPE_NAME`].
    pub fn factory(context: HandlerContext) -> Result<Box<dyn TrackHandler>> {
        Ok(Box::new(Self::new(context)))
    }

    /// URL of the feature index for one reference sequence.
    pub fn track_data_url(&self, refseq: &str) -> String {
        format!("{}/{}", self.url_for(refseq), TRACK_DATA_FILE)
    }
}

impl TrackHandler for FeatureTrack {
    fn type_name(&self) -> &str {
        Self::TYPE_NAME
    }

    fn kind(&self) -> TrackKind {
        TrackKind::Feature
    }

    fn context(&self) -> &HandlerContext {
        &self.context
    }
}

/// Handler for image tracks.
#[derive(Debug, Clone)]
pub struct ImageTrack {
    context: HandlerContext,
}

impl ImageTrack {
    pub const TYPE_NAME: &'static str = "ImageTrack";

    pub fn new(context: HandlerContext) -> Self {
        Self {
            context: with_default_key(context),
        }
    }

    /// Factory registered under [`Self::TYPE_NAME`].
    pub fn factory(context: HandlerContext) -> Result<Box<dyn TrackHandler>> {
        Ok(Box::new(Self::new(context)))
    }

    /// Directory holding the tiles of one zoom level.
    pub fn zoom_dir(&self, refseq: &str, zoom_level: u32) -> std::path::PathBuf {
        self.storage_dir_for(refseq).join(zoom_level.to_string())
    }
}

impl TrackHandler for ImageTrack {
    fn type_name(&self) -> &str {
        Self::TYPE_NAME
    }

    fn kind(&self) -> TrackKind {
        TrackKind::Image
    }

    fn context(&self) -> &HandlerContext {
        &self.context
    }
}
