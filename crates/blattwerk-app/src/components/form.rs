// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Form synthesizer: one labelled control per field descriptor, dispatching
// exhaustively on the field kind. Values are read from and written into a
// flat name-to-string map seeded with the descriptor defaults; no
// validation happens here.

use std::collections::HashMap;

use dioxus::prelude::*;

use blattwerk_core::registry::{FieldDescriptor, FieldKind};

use crate::theme::Palette;

#[component]
pub fn OptionsForm(
    fields: &'static [FieldDescriptor],
    values: Signal<HashMap<String, String>>,
    disabled: bool,
    palette: Palette,
) -> Element {
    if fields.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 12px;",
            for field in fields.iter() {
                {field_row(field, values, disabled, palette)}
            }
        }
    }
}

fn field_row(
    field: &'static FieldDescriptor,
    values: Signal<HashMap<String, String>>,
    disabled: bool,
    palette: Palette,
) -> Element {
    let marker = if field.required { " *" } else { "" };
    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 4px;",
            label { style: "font-size: 14px; color: {palette.muted};",
                "{field.label}{marker}"
            }
            {control(field, values, disabled, palette)}
        }
    }
}

fn control(
    field: &'static FieldDescriptor,
    mut values: Signal<HashMap<String, String>>,
    disabled: bool,
    palette: Palette,
) -> Element {
    let name = field.name;
    let current = values
        .read()
        .get(name)
        .cloned()
        .unwrap_or_else(|| field.default_value());
    let input_style = format!(
        "padding: 8px; border: 1px solid {}; border-radius: 8px; background: {}; color: {}; font-size: 14px;",
        palette.border, palette.card_bg, palette.fg
    );

    match field.kind {
        FieldKind::Text { placeholder } => rsx! {
            input {
                r#type: "text",
                style: "{input_style}",
                value: "{current}",
                placeholder: "{placeholder}",
                disabled: disabled,
                oninput: move |evt| {
                    values.write().insert(name.to_string(), evt.value());
                },
            }
        },

        FieldKind::Password { placeholder, .. } => rsx! {
            input {
                r#type: "password",
                style: "{input_style}",
                value: "{current}",
                placeholder: "{placeholder}",
                disabled: disabled,
                oninput: move |evt| {
                    values.write().insert(name.to_string(), evt.value());
                },
            }
        },

        FieldKind::TextArea { placeholder } => rsx! {
            textarea {
                style: "{input_style} min-height: 120px; resize: vertical;",
                value: "{current}",
                placeholder: "{placeholder}",
                disabled: disabled,
                oninput: move |evt| {
                    values.write().insert(name.to_string(), evt.value());
                },
            }
        },

        FieldKind::Number { min, max, .. } => rsx! {
            input {
                r#type: "number",
                style: "{input_style} width: 100px;",
                value: "{current}",
                min: "{min}",
                max: "{max}",
                disabled: disabled,
                onchange: move |evt| {
                    if let Ok(n) = evt.value().parse::<i64>() {
                        values.write().insert(name.to_string(), n.clamp(min, max).to_string());
                    }
                },
            }
        },

        FieldKind::Select { choices, .. } => rsx! {
            select {
                style: "{input_style}",
                disabled: disabled,
                onchange: move |evt| {
                    values.write().insert(name.to_string(), evt.value());
                },
                for choice in choices.iter() {
                    option {
                        value: "{choice.value}",
                        selected: current == choice.value,
                        "{choice.label}"
                    }
                }
            }
        },

        FieldKind::Color { .. } => rsx! {
            input {
                r#type: "color",
                style: "border: 1px solid {palette.border}; border-radius: 8px; width: 56px; height: 36px; background: {palette.card_bg};",
                value: "{current}",
                disabled: disabled,
                oninput: move |evt| {
                    values.write().insert(name.to_string(), evt.value());
                },
            }
        },
    }
}
