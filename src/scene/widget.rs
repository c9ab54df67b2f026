use crate::assets::font::{FontFace, FontStyle};
use crate::assets::region::Region;
use crate::foundation::core::{Point, Size};

/// Type-specific content of a built widget.
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetKind {
    /// Plain container (`Panel`).
    Group(GroupWidget),
    /// Image button, optionally with a text overlay.
    Button(ButtonWidget),
    /// Two-state check box.
    CheckBox(CheckBoxWidget),
    /// Single image (`ImageView`).
    Image(ImageWidget),
    /// Text drawn with a vector or default font (`Label`).
    Label(LabelWidget),
    /// Text drawn with a bitmap font (`LabelBMFont`).
    BitmapLabel(BitmapLabelWidget),
    /// Progress bar.
    LoadingBar(LoadingBarWidget),
    /// Scrollable container (`ScrollView`).
    ScrollPane(ScrollPaneWidget),
    /// Editable single line text.
    TextField(TextFieldWidget),
}

impl WidgetKind {
    /// `true` for kinds that can hold child widgets.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::Group(_) | Self::Button(_) | Self::CheckBox(_) | Self::ScrollPane(_)
        )
    }

    /// Short name used in tree dumps.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Group(_) => "Group",
            Self::Button(_) => "Button",
            Self::CheckBox(_) => "CheckBox",
            Self::Image(_) => "Image",
            Self::Label(_) => "Label",
            Self::BitmapLabel(_) => "BitmapLabel",
            Self::LoadingBar(_) => "LoadingBar",
            Self::ScrollPane(_) => "ScrollPane",
            Self::TextField(_) => "TextField",
        }
    }
}

/// Image placed inside a container without stretching.
#[derive(Clone, Debug, PartialEq)]
pub struct Background {
    /// Image region.
    pub region: Region,
    /// Offset of the image inside the container.
    pub offset: Point,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupWidget {
    pub background: Option<Background>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ButtonWidget {
    pub up: Option<Region>,
    pub down: Option<Region>,
    pub disabled: Option<Region>,
    pub label: Option<TextOverlay>,
}

/// Text drawn over a button.
#[derive(Clone, Debug, PartialEq)]
pub struct TextOverlay {
    pub text: String,
    pub style: Option<FontStyle>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CheckBoxWidget {
    pub background: Option<Region>,
    pub background_selected: Option<Region>,
    pub cross: Option<Region>,
    pub background_disabled: Option<Region>,
    pub cross_disabled: Option<Region>,
    pub checked: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageWidget {
    pub region: Option<Region>,
}

/// Alignment along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

impl Align {
    /// Map the export's 0/1/2 alignment codes; anything else is `Start`.
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Center,
            2 => Self::End,
            _ => Self::Start,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelWidget {
    pub text: String,
    /// `None` when the font could not be generated.
    pub style: Option<FontStyle>,
    pub h_align: Align,
    pub v_align: Align,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BitmapLabelWidget {
    pub text: String,
    pub face: FontFace,
}

/// Direction a loading bar fills in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FillDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadingBarWidget {
    pub background: Option<Region>,
    pub fill: Option<Region>,
    /// 0..=100.
    pub percent: f64,
    pub direction: FillDirection,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollPaneWidget {
    pub content_size: Size,
    pub scroll_x: bool,
    pub scroll_y: bool,
    pub bounce: bool,
    pub background: Option<Region>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextFieldWidget {
    pub text: String,
    pub placeholder: String,
    pub style: Option<FontStyle>,
    pub background: Option<Region>,
    pub cursor: Option<Region>,
    pub editable: bool,
    pub max_length: Option<u32>,
    /// Mask text shown instead of the content, when password mode is on.
    pub password_mask: Option<String>,
}
