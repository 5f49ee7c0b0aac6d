//! Annotate text use case
//!
//! Extraction, segmentation and rendering of a single piece of text, using
//! the routes of the surrounding workspace when there is one.

use crate::domain::text::{self, ExtractionResult, LinkRoutes, RenderFormat, Segment};
use crate::error::{AnnotextError, Result};
use crate::infrastructure::{FileSystemWorkspace, WorkspaceRepository};
use tracing::debug;

/// Service for annotating text
pub struct AnnotateService {
    routes: LinkRoutes,
}

impl AnnotateService {
    pub fn new(routes: LinkRoutes) -> Self {
        AnnotateService { routes }
    }

    /// Use the discovered workspace's routes, or the defaults outside a workspace
    pub fn from_environment() -> Result<Self> {
        let routes = match FileSystemWorkspace::discover() {
            Ok(workspace) => {
                debug!(root = %workspace.root().display(), "using workspace routes");
                workspace.load_config()?.routes()
            }
            Err(AnnotextError::NotWorkspace(_)) => {
                debug!("no workspace found, using default routes");
                LinkRoutes::default()
            }
            Err(e) => return Err(e),
        };

        Ok(AnnotateService::new(routes))
    }

    pub fn routes(&self) -> &LinkRoutes {
        &self.routes
    }

    pub fn extract(&self, input: &str) -> ExtractionResult {
        let result = text::extract(input);
        debug!(
            hashtags = result.hashtags.len(),
            mentions = result.mentions.len(),
            links = result.links.len(),
            "extracted annotations"
        );
        result
    }

    pub fn segment(&self, input: &str) -> Vec<Segment> {
        let segments = text::segment(input);
        debug!(count = segments.len(), "segmented text");
        segments
    }

    pub fn render(&self, input: &str, format: RenderFormat) -> String {
        text::render(&self.segment(input), &self.routes, format)
    }
}

impl Default for AnnotateService {
    fn default() -> Self {
        AnnotateService::new(LinkRoutes::default())
    }
}
