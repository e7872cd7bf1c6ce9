//! Serializers for extracted label data.
//!
//! Only JSON output is supported: a flat object mapping class names to
//! `[cleaned_label, [raw_label, ...]]`.

pub mod json;
