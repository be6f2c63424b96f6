// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Declarative operation registry.
//
// Every selectable operation is described by a static `OperationDescriptor`:
// which endpoint it posts to, which files it accepts and how many, and the
// ordered list of typed option fields the form synthesizer renders for it.
// The registry is immutable for the process lifetime.

use std::collections::HashMap;

/// Whether an operation accepts exactly one file or an ordered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Single,
    Multiple,
}

/// Which input files an operation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFilter {
    Pdf,
    Images,
}

impl FileFilter {
    /// Human-readable filter name for the file picker.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF documents",
            Self::Images => "Images",
        }
    }

    /// Extensions offered by the file picker.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Pdf => &["pdf"],
            Self::Images => &["jpg", "jpeg", "png", "tiff", "tif", "bmp", "webp"],
        }
    }
}

/// One entry of a closed select control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// Value submitted to the service.
    pub value: &'static str,
    /// Label shown to the user.
    pub label: &'static str,
}

/// The kind of an option field, as a closed tagged union.
///
/// Each variant carries only the attributes relevant to it, so the form
/// synthesizer's dispatch is exhaustive and a select without choices or a
/// number without bounds cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text input.
    Text { placeholder: &'static str },
    /// Masked input. `min_len` is enforced at validation time.
    Password {
        placeholder: &'static str,
        min_len: usize,
    },
    /// Multi-line text input.
    TextArea { placeholder: &'static str },
    /// Numeric input with inclusive bounds.
    Number { min: i64, max: i64, default: i64 },
    /// Closed choice control, rendered in declaration order.
    Select {
        choices: &'static [Choice],
        default_index: usize,
    },
    /// Colour picker. Renders `#000000` when no default is declared.
    Color { default: Option<&'static str> },
}

/// One option field of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Form part name, unique within its operation.
    pub name: &'static str,
    /// Label shown above the control.
    pub label: &'static str,
    /// Required fields must carry a non-empty trimmed value at submit time.
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// The control value before the user touches the form.
    pub fn default_value(&self) -> String {
        match self.kind {
            FieldKind::Text { .. } | FieldKind::Password { .. } | FieldKind::TextArea { .. } => {
                String::new()
            }
            FieldKind::Number { default, .. } => default.to_string(),
            FieldKind::Select {
                choices,
                default_index,
            } => choices[default_index].value.to_string(),
            FieldKind::Color { default } => default.unwrap_or("#000000").to_string(),
        }
    }
}

/// Declarative description of one document-processing operation.
#[derive(Debug, Clone, Copy)]
pub struct OperationDescriptor {
    /// Stable operation key, unique across the registry.
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Path on the processing service this operation posts to.
    pub endpoint: &'static str,
    pub accept: FileFilter,
    pub cardinality: Cardinality,
    /// Operations that can run without any staged file set this to false.
    pub requires_file: bool,
    /// True when the service answers with a structured analysis payload
    /// instead of a downloadable file.
    pub structured_result: bool,
    /// Ordered option fields rendered by the form synthesizer.
    pub fields: &'static [FieldDescriptor],
    /// Prefix of the fallback download filename.
    pub download_prefix: &'static str,
    /// Extension of the fallback download filename.
    pub download_ext: &'static str,
}

const PAGE_SIZE_CHOICES: &[Choice] = &[
    Choice { value: "A4", label: "A4" },
    Choice { value: "Letter", label: "Letter" },
    Choice { value: "Legal", label: "Legal" },
];

/// All selectable operations, in display order.
pub const OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor {
        key: "merge",
        title: "Merge PDFs",
        description: "Combine multiple PDF files into a single document",
        endpoint: "/api/merge",
        accept: FileFilter::Pdf,
        cardinality: Cardinality::Multiple,
        requires_file: true,
        structured_result: false,
        fields: &[],
        download_prefix: "merged",
        download_ext: "pdf",
    },
    OperationDescriptor {
        key: "compress",
        title: "Compress PDF",
        description: "Reduce file size while maintaining quality",
        endpoint: "/api/compress",
        accept: FileFilter::Pdf,
        cardinality: Cardinality::Single,
        requires_file: true,
        structured_result: false,
        fields: &[FieldDescriptor {
            name: "quality",
            label: "Compression quality",
            required: false,
            kind: FieldKind::Select {
                choices: &[
                    Choice {
                        value: "high",
                        label: "High quality (minimal compression)",
                    },
                    Choice {
                        value: "medium",
                        label: "Medium quality (balanced)",
                    },
                    Choice {
                        value: "low",
                        label: "Low quality (maximum compression)",
                    },
                ],
                default_index: 1,
            },
        }],
        download_prefix: "compressed",
        download_ext: "pdf",
    },
    OperationDescriptor {
        key: "encrypt",
        title: "Encrypt PDF",
        description: "Add password protection to your document",
        endpoint: "/api/encrypt",
        accept: FileFilter::Pdf,
        cardinality: Cardinality::Single,
        requires_file: true,
        structured_result: false,
        fields: &[FieldDescriptor {
            name: "password",
            label: "Password",
            required: true,
            kind: FieldKind::Password {
                placeholder: "Enter password",
                min_len: 6,
            },
        }],
        download_prefix: "encrypted",
        download_ext: "pdf",
    },
    OperationDescriptor {
        key: "pdf-to-text",
        title: "PDF to Text",
        description: "Extract all text content from a PDF",
        endpoint: "/api/pdf-to-text",
        accept: FileFilter::Pdf,
        cardinality: Cardinality::Single,
        requires_file: true,
        structured_result: false,
        fields: &[],
        download_prefix: "extracted_text",
        download_ext: "txt",
    },
    OperationDescriptor {
        key: "img-to-pdf",
        title: "Image to PDF",
        description: "Convert images to a PDF document",
        endpoint: "/api/img-to-pdf",
        accept: FileFilter::Images,
        cardinality: Cardinality::Multiple,
        requires_file: true,
        structured_result: false,
        fields: &[FieldDescriptor {
            name: "page_size",
            label: "Page size",
            required: false,
            kind: FieldKind::Select {
                choices: PAGE_SIZE_CHOICES,
                default_index: 0,
            },
        }],
        download_prefix: "converted",
        download_ext: "pdf",
    },
    OperationDescriptor {
        key: "rotate",
        title: "Rotate PDF",
        description: "Rotate pages clockwise or counterclockwise",
        endpoint: "/api/rotate",
        accept: FileFilter::Pdf,
        cardinality: Cardinality::Single,
        requires_file: true,
        structured_result: false,
        fields: &[
            FieldDescriptor {
                name: "rotation",
                label: "Rotation",
                required: true,
                kind: FieldKind::Select {
                    choices: &[
                        Choice {
                            value: "90",
                            label: "90\u{b0} clockwise",
                        },
                        Choice {
                            value: "180",
                            label: "180\u{b0}",
                        },
                        Choice {
                            value: "270",
                            label: "270\u{b0} clockwise (90\u{b0} counter)",
                        },
                    ],
                    default_index: 0,
                },
            },
            FieldDescriptor {
                name: "pages",
                label: "Pages (leave empty for all)",
                required: false,
                kind: FieldKind::Text {
                    placeholder: "e.g. 1-3,5",
                },
            },
        ],
        download_prefix: "rotated",
        download_ext: "pdf",
    },
    OperationDescriptor {
        key: "watermark",
        title: "Add Watermark",
        description: "Stamp a text watermark across every page",
        endpoint: "/api/watermark",
        accept: FileFilter::Pdf,
        cardinality: Cardinality::Single,
        requires_file: true,
        structured_result: false,
        fields: &[
            FieldDescriptor {
                name: "watermark_text",
                label: "Watermark text",
                required: true,
                kind: FieldKind::Text {
                    placeholder: "CONFIDENTIAL",
                },
            },
            FieldDescriptor {
                name: "opacity",
                label: "Opacity",
                required: false,
                kind: FieldKind::Select {
                    choices: &[
                        Choice {
                            value: "0.2",
                            label: "20%",
                        },
                        Choice {
                            value: "0.4",
                            label: "40%",
                        },
                        Choice {
                            value: "0.6",
                            label: "60%",
                        },
                        Choice {
                            value: "0.8",
                            label: "80%",
                        },
                    ],
                    default_index: 1,
                },
            },
        ],
        download_prefix: "watermarked",
        download_ext: "pdf",
    },
    OperationDescriptor {
        key: "analyze-text",
        title: "Analyze Text",
        description: "Word counts, top keywords, and spelling report",
        endpoint: "/api/analyze-text",
        accept: FileFilter::Pdf,
        cardinality: Cardinality::Single,
        requires_file: true,
        structured_result: true,
        fields: &[],
        download_prefix: "analysis",
        download_ext: "json",
    },
    OperationDescriptor {
        key: "edit-text-style",
        title: "Restyle Text",
        description: "Produce a new PDF with styled text, typed or extracted",
        endpoint: "/api/edit-text-style",
        accept: FileFilter::Pdf,
        cardinality: Cardinality::Single,
        requires_file: false,
        structured_result: false,
        fields: &[
            FieldDescriptor {
                name: "text_content",
                label: "Text content",
                required: true,
                kind: FieldKind::TextArea {
                    placeholder: "Type or paste the text to style",
                },
            },
            FieldDescriptor {
                name: "font_size",
                label: "Font size",
                required: false,
                kind: FieldKind::Number {
                    min: 6,
                    max: 72,
                    default: 12,
                },
            },
            FieldDescriptor {
                name: "font_color",
                label: "Font colour",
                required: false,
                kind: FieldKind::Color {
                    default: Some("#000000"),
                },
            },
            FieldDescriptor {
                name: "font_family",
                label: "Font",
                required: false,
                kind: FieldKind::Select {
                    choices: &[
                        Choice {
                            value: "Helvetica",
                            label: "Helvetica",
                        },
                        Choice {
                            value: "Times",
                            label: "Times",
                        },
                        Choice {
                            value: "Courier",
                            label: "Courier",
                        },
                        Choice {
                            value: "Arial",
                            label: "Arial",
                        },
                    ],
                    default_index: 0,
                },
            },
            FieldDescriptor {
                name: "highlight_color",
                label: "Highlight colour",
                required: false,
                kind: FieldKind::Color { default: None },
            },
            FieldDescriptor {
                name: "page_size",
                label: "Page size",
                required: false,
                kind: FieldKind::Select {
                    choices: PAGE_SIZE_CHOICES,
                    default_index: 0,
                },
            },
        ],
        download_prefix: "styled",
        download_ext: "pdf",
    },
];

/// Look up an operation by key.
///
/// `None` means the key did not come from the registry; callers must treat
/// this as a configuration error and abort the session with a visible
/// notice rather than proceed.
pub fn lookup(key: &str) -> Option<&'static OperationDescriptor> {
    OPERATIONS.iter().find(|op| op.key == key)
}

/// Seed values for a freshly rendered form.
///
/// Every field name appears as a key, mapped to its default control value,
/// so reading the form back always covers the full descriptor list.
pub fn initial_values(fields: &[FieldDescriptor]) -> HashMap<String, String> {
    fields
        .iter()
        .map(|f| (f.name.to_string(), f.default_value()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn operation_keys_are_unique() {
        let mut seen = HashSet::new();
        for op in OPERATIONS {
            assert!(seen.insert(op.key), "duplicate operation key {}", op.key);
        }
    }

    #[test]
    fn field_names_are_unique_within_each_operation() {
        for op in OPERATIONS {
            let mut seen = HashSet::new();
            for field in op.fields {
                assert!(
                    seen.insert(field.name),
                    "duplicate field {} in {}",
                    field.name,
                    op.key
                );
            }
        }
    }

    #[test]
    fn selects_have_choices_and_valid_defaults() {
        for op in OPERATIONS {
            for field in op.fields {
                if let FieldKind::Select {
                    choices,
                    default_index,
                } = field.kind
                {
                    assert!(!choices.is_empty(), "{}.{} has no choices", op.key, field.name);
                    assert!(
                        default_index < choices.len(),
                        "{}.{} default out of range",
                        op.key,
                        field.name
                    );
                }
            }
        }
    }

    #[test]
    fn number_bounds_contain_default() {
        for op in OPERATIONS {
            for field in op.fields {
                if let FieldKind::Number { min, max, default } = field.kind {
                    assert!(min <= default && default <= max);
                }
            }
        }
    }

    #[test]
    fn lookup_finds_known_and_rejects_unknown() {
        assert_eq!(lookup("merge").map(|op| op.key), Some("merge"));
        assert!(lookup("split").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn initial_values_cover_every_field() {
        for op in OPERATIONS {
            let values = initial_values(op.fields);
            assert_eq!(values.len(), op.fields.len());
            for field in op.fields {
                assert!(values.contains_key(field.name));
            }
        }
    }

    #[test]
    fn select_defaults_read_back_as_choice_values() {
        let values = initial_values(lookup("compress").unwrap().fields);
        assert_eq!(values["quality"], "medium");
    }

    #[test]
    fn color_without_default_reads_back_black() {
        let values = initial_values(lookup("edit-text-style").unwrap().fields);
        assert_eq!(values["highlight_color"], "#000000");
        assert_eq!(values["font_color"], "#000000");
        assert_eq!(values["font_size"], "12");
    }
}
