//! Shared UI primitive library for the favorites widget.
//!
//! The crate owns a small set of Leptos primitives, an inline icon set, and the stable
//! `data-ui-*` DOM contract consumed by the stylesheet. App code composes these primitives instead
//! of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Button, ButtonSize, ButtonVariant, Card, ChoiceOption, Cluster, ColorField, ColorSwatch,
    CompletionItem, CompletionList, FieldMessage, Grid, Heading, IconButton, LayoutGap,
    LayoutPadding, Modal, Stack, TextField, ToastItem, ToastStack, ToastTone,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonVariant, Card, ChoiceOption, Cluster, ColorField, ColorSwatch,
        CompletionItem, CompletionList, FieldMessage, Grid, Heading, Icon, IconButton, IconName,
        IconSize, LayoutGap, LayoutPadding, Modal, Stack, TextField, ToastItem, ToastStack,
        ToastTone,
    };
}
