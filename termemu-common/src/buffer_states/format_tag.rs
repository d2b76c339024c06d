// Copyright (C) 2026 the termemu authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::buffer_states::{
    cursor::StateColors,
    fonts::{FontDecorations, FontWeight},
    url::Url,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormatTag {
    pub colors: StateColors,
    pub font_weight: FontWeight,
    pub font_decorations: Vec<FontDecorations>,
    pub url: Option<Url>,
    pub blink: bool,
    pub protected: bool,
}

impl Default for FormatTag {
    fn default() -> Self {
        Self {
            colors: StateColors::default(),
            font_weight: FontWeight::Normal,
            font_decorations: Vec::new(),
            url: None,
            blink: false,
            protected: false,
        }
    }
}
