#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use vc_json as json;
pub use vc_mapping as mapping;
pub use vc_utils as utils;
