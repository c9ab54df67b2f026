use serde::{Deserialize, Deserializer, Serialize};

/// Root of one CocoStudio UI export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDef {
    /// Root widget node.
    pub widget_tree: WidgetNodeDef,
    /// Named keyframe animations; absent in exports without animation.
    #[serde(default)]
    pub animation: AnimationDef,
}

/// One node of the declarative widget tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WidgetNodeDef {
    /// Node-level class name; only consulted when the option bag has none.
    #[serde(default, deserialize_with = "null_as_default")]
    pub classname: String,
    /// Option bag.
    #[serde(default)]
    pub options: OptionDef,
    /// Children in document order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<WidgetNodeDef>,
}

impl WidgetNodeDef {
    /// Effective class name selecting the widget builder.
    pub fn class_name(&self) -> &str {
        if self.options.classname.is_empty() {
            &self.classname
        } else {
            &self.options.classname
        }
    }
}

/// Reference to an image or font file as exported (`{"path": "..."}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDef {
    /// Path relative to the export, `<atlas stem>/<region>.<ext>` for packed textures.
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
}

/// Flat property bag attached to a widget node.
///
/// Only the fields consumed by the builders are modeled; anything else in the export is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionDef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub classname: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Tag binding animation nodes to this widget.
    #[serde(default, rename = "actiontag", deserialize_with = "lenient_i32")]
    pub action_tag: i32,

    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "one")]
    pub scale_x: f64,
    #[serde(default = "one")]
    pub scale_y: f64,
    #[serde(default, rename = "ZOrder", deserialize_with = "lenient_i32")]
    pub z_order: i32,

    // Channels are 0..=255, not normalized.
    #[serde(default = "full", rename = "colorR", deserialize_with = "channel")]
    pub color_r: u8,
    #[serde(default = "full", rename = "colorG", deserialize_with = "channel")]
    pub color_g: u8,
    #[serde(default = "full", rename = "colorB", deserialize_with = "channel")]
    pub color_b: u8,
    #[serde(default = "full", deserialize_with = "channel")]
    pub opacity: u8,

    #[serde(default = "yes", deserialize_with = "null_as_true")]
    pub visible: bool,
    #[serde(default, rename = "flipX", deserialize_with = "null_as_default")]
    pub flip_x: bool,
    #[serde(default, rename = "flipY", deserialize_with = "null_as_default")]
    pub flip_y: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub clip_able: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub touch_able: bool,

    #[serde(default, rename = "backGroundImageData")]
    pub background_image_data: Option<ResourceDef>,
    #[serde(default)]
    pub file_name_data: Option<ResourceDef>,
    #[serde(default)]
    pub normal_data: Option<ResourceDef>,
    #[serde(default)]
    pub pressed_data: Option<ResourceDef>,
    #[serde(default)]
    pub disabled_data: Option<ResourceDef>,
    #[serde(default, rename = "backGroundBoxData")]
    pub background_box_data: Option<ResourceDef>,
    #[serde(default, rename = "backGroundBoxSelectedData")]
    pub background_box_selected_data: Option<ResourceDef>,
    #[serde(default)]
    pub front_cross_data: Option<ResourceDef>,
    #[serde(default, rename = "backGroundBoxDisabledData")]
    pub background_box_disabled_data: Option<ResourceDef>,
    #[serde(default)]
    pub front_cross_disabled_data: Option<ResourceDef>,
    #[serde(default)]
    pub texture_data: Option<ResourceDef>,
    #[serde(default)]
    pub cursor_image_data: Option<ResourceDef>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub font_name: String,
    #[serde(default = "default_font_size", deserialize_with = "font_size")]
    pub font_size: u32,
    #[serde(default, rename = "textColorR", deserialize_with = "lenient_u8")]
    pub text_color_r: u8,
    #[serde(default, rename = "textColorG", deserialize_with = "lenient_u8")]
    pub text_color_g: u8,
    #[serde(default, rename = "textColorB", deserialize_with = "lenient_u8")]
    pub text_color_b: u8,
    #[serde(default, deserialize_with = "lenient_u8")]
    pub h_alignment: u8,
    #[serde(default, deserialize_with = "lenient_u8")]
    pub v_alignment: u8,

    #[serde(default, deserialize_with = "null_as_default")]
    pub place_holder: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_length_enable: bool,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub max_length: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub password_enable: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub password_style_text: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub selected_state: bool,
    #[serde(default)]
    pub percent: f64,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub direction: i32,
    #[serde(default)]
    pub inner_width: f64,
    #[serde(default)]
    pub inner_height: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bounce_enable: bool,
}

impl Default for OptionDef {
    fn default() -> Self {
        Self {
            classname: String::new(),
            name: String::new(),
            action_tag: 0,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            z_order: 0,
            color_r: 255,
            color_g: 255,
            color_b: 255,
            opacity: 255,
            visible: true,
            flip_x: false,
            flip_y: false,
            clip_able: false,
            touch_able: false,
            background_image_data: None,
            file_name_data: None,
            normal_data: None,
            pressed_data: None,
            disabled_data: None,
            background_box_data: None,
            background_box_selected_data: None,
            front_cross_data: None,
            background_box_disabled_data: None,
            front_cross_disabled_data: None,
            texture_data: None,
            cursor_image_data: None,
            text: String::new(),
            font_name: String::new(),
            font_size: default_font_size(),
            text_color_r: 0,
            text_color_g: 0,
            text_color_b: 0,
            h_alignment: 0,
            v_alignment: 0,
            place_holder: String::new(),
            max_length_enable: false,
            max_length: 0,
            password_enable: false,
            password_style_text: String::new(),
            selected_state: false,
            percent: 0.0,
            direction: 0,
            inner_width: 0.0,
            inner_height: 0.0,
            bounce_enable: false,
        }
    }
}

/// Path of an optional resource reference; empty when absent.
pub fn resource_path(res: &Option<ResourceDef>) -> &str {
    res.as_ref().map(|r| r.path.as_str()).unwrap_or("")
}

/// `animation` section of the export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimationDef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub actionlist: Vec<ActionDef>,
}

/// One named animation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionDef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub actionnodelist: Vec<ActionNodeDef>,
}

/// Frames targeting one widget, bound by tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionNodeDef {
    #[serde(default, rename = "ActionTag", deserialize_with = "lenient_i32")]
    pub action_tag: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub actionframelist: Vec<ActionFrameDef>,
}

/// One keyframe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionFrameDef {
    #[serde(default, deserialize_with = "lenient_i32")]
    pub frameid: i32,
    /// Raw start time text; see [`crate::animation::compile::parse_start_time`].
    #[serde(default, deserialize_with = "string_or_number")]
    pub starttime: String,
    #[serde(default)]
    pub positionx: f64,
    #[serde(default)]
    pub positiony: f64,
    #[serde(default = "one")]
    pub scalex: f64,
    #[serde(default = "one")]
    pub scaley: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "full", deserialize_with = "channel")]
    pub opacity: u8,
    #[serde(default = "full", deserialize_with = "channel")]
    pub colorr: u8,
    #[serde(default = "full", deserialize_with = "channel")]
    pub colorg: u8,
    #[serde(default = "full", deserialize_with = "channel")]
    pub colorb: u8,
    #[serde(default, rename = "tweenType", deserialize_with = "lenient_i32")]
    pub tween_type: i32,
}

impl Default for ActionFrameDef {
    fn default() -> Self {
        Self {
            frameid: 0,
            starttime: String::new(),
            positionx: 0.0,
            positiony: 0.0,
            scalex: 1.0,
            scaley: 1.0,
            rotation: 0.0,
            opacity: 255,
            colorr: 255,
            colorg: 255,
            colorb: 255,
            tween_type: 0,
        }
    }
}

fn one() -> f64 {
    1.0
}

fn full() -> u8 {
    255
}

fn yes() -> bool {
    true
}

fn default_font_size() -> u32 {
    20
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Str(String),
        Num(serde_json::Number),
    }

    Ok(match Option::<Repr>::deserialize(deserializer)? {
        Some(Repr::Str(s)) => s,
        Some(Repr::Num(n)) => n.to_string(),
        None => String::new(),
    })
}

// Numeric fields accept any JSON number or null. Floats truncate toward zero and out-of-range
// values saturate; `as` casts from f64 do both.

fn channel<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.map_or(full(), |v| v as u8))
}

fn lenient_u8<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.map_or(0, |v| v as u8))
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.map_or(0, |v| v as u32))
}

fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.map_or(0, |v| v as i32))
}

fn font_size<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.map_or(default_font_size(), |v| v as u32))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
