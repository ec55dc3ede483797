//! PresentationML part writers.

pub mod pres;
pub mod shape;
pub mod slide;

pub(crate) use pres::{app_props_xml, core_props_xml, presentation_xml};
pub(crate) use slide::slide_xml;
