// File: rusty-forms/src/render.rs
// Purpose: HTML rendering of inputs and forms with maud

use crate::form::Form;
use crate::input::{Input, InputKind};
use crate::options::KeyValue;
use maud::{html, Markup, PreEscaped, Render};

fn escape(text: &str) -> String {
    html! { (text) }.into_string()
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "on" | "1")
}

/// Opening tag with attributes known only at runtime. maud escapes the
/// values but needs attribute names at compile time.
struct Tag(String);

impl Tag {
    fn open(name: &str) -> Self {
        Tag(format!("<{name}"))
    }

    fn attr(mut self, key: &str, value: &str) -> Self {
        self.0.push(' ');
        self.0.push_str(key);
        self.0.push_str("=\"");
        self.0.push_str(&escape(value));
        self.0.push('"');
        self
    }

    fn flag(mut self, key: &str, on: bool) -> Self {
        if on {
            self.0.push(' ');
            self.0.push_str(key);
        }
        self
    }

    fn common(self, input: &Input) -> Self {
        let tag = input
            .attributes()
            .iter()
            .fold(self, |tag, KeyValue { key, value }| tag.attr(key, value));
        tag.flag("required", input.is_required())
            .flag("disabled", input.is_disabled())
            .flag("readonly", input.is_readonly())
    }

    fn close(mut self) -> PreEscaped<String> {
        self.0.push('>');
        PreEscaped(self.0)
    }
}

fn text_like(input: &Input, tag: &str) -> Markup {
    let open = Tag::open("input")
        .attr("type", tag)
        .attr("id", input.id())
        .attr("name", input.name())
        .attr("value", input.value())
        .attr("placeholder", input.placeholder())
        .attr("title", input.title())
        .common(input)
        .close();
    html! { (open) }
}

fn textarea(input: &Input) -> Markup {
    let open = Tag::open("textarea")
        .attr("id", input.id())
        .attr("name", input.name())
        .attr("placeholder", input.placeholder())
        .attr("title", input.title())
        .common(input)
        .close();
    html! { (open) (input.value()) (PreEscaped("</textarea>")) }
}

fn select(input: &Input) -> Markup {
    let values = input.values();
    let open = Tag::open("select")
        .attr("id", input.id())
        .attr("name", input.name())
        .attr("title", input.title())
        .common(input)
        .close();
    html! {
        (open)
        @for opt in input.options() {
            option value=(opt.key) selected[values.contains(&opt.key)] { (opt.value) }
        }
        (PreEscaped("</select>"))
    }
}

fn radio(input: &Input) -> Markup {
    let current = input.value();
    html! {
        @for opt in input.options() {
            @let open = Tag::open("input")
                .attr("type", "radio")
                .attr("id", &format!("{}.{}", input.id(), opt.key))
                .attr("name", input.name())
                .attr("value", &opt.key)
                .flag("checked", opt.key.eq_ignore_ascii_case(current))
                .common(input)
                .close();
            label { (open) (opt.value) }
        }
    }
}

fn datalist(input: &Input) -> Markup {
    let list_id = format!("{}-list", input.id());
    let open = Tag::open("input")
        .attr("type", "text")
        .attr("id", input.id())
        .attr("name", input.name())
        .attr("list", &list_id)
        .attr("value", input.value())
        .attr("placeholder", input.placeholder())
        .attr("title", input.title())
        .common(input)
        .close();
    html! {
        (open)
        datalist id=(list_id) {
            @for opt in input.options() {
                option value=(opt.key) { (opt.value) }
            }
        }
    }
}

fn checkbox(input: &Input) -> Markup {
    let open = Tag::open("input")
        .attr("type", "checkbox")
        .attr("id", input.id())
        .attr("name", input.name())
        .attr("title", input.title())
        .flag("checked", is_truthy(input.value()))
        .common(input)
        .close();
    html! { (open) }
}

impl Render for Input {
    fn render(&self) -> Markup {
        match self.kind() {
            InputKind::Textarea => textarea(self),
            InputKind::Select => select(self),
            InputKind::Radio | InputKind::Gender => radio(self),
            InputKind::Datalist => datalist(self),
            InputKind::Checkbox => checkbox(self),
            InputKind::Text
            | InputKind::Address
            | InputKind::Email
            | InputKind::Password
            | InputKind::Phone
            | InputKind::Number
            | InputKind::Date
            | InputKind::Hour
            | InputKind::Rut
            | InputKind::Ip
            | InputKind::Filepath => text_like(self, self.html_name()),
        }
    }
}

impl<R> Render for Form<R> {
    fn render(&self) -> Markup {
        let config = &self.config;
        let method = config.ssr.then_some(config.method.as_str());
        let action = if config.ssr { config.action.as_deref() } else { None };

        html! {
            form id=(self.id) class=[config.class.as_deref()] method=[method] action=[action] {
                @for input in &self.inputs {
                    (input)
                }
                @if config.ssr {
                    button type="submit" { (config.submit_label) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_input_markup() {
        let mut input = Input::new(InputKind::Email, "f", "email");
        input.set_value("a\"b@x.io");
        input.set_required(true);

        assert_eq!(
            input.render().into_string(),
            r#"<input type="email" id="f.email" name="email" value="a&quot;b@x.io" placeholder="email" title="email" required>"#
        );
    }

    #[test]
    fn test_textarea_escapes_body() {
        let mut input = Input::new(InputKind::Textarea, "", "notes");
        input.set_value("<b>hi</b>");
        let html = input.render().into_string();
        assert!(html.ends_with("&lt;b&gt;hi&lt;/b&gt;</textarea>"));
    }

    #[test]
    fn test_select_marks_selected_option() {
        let mut input =
            Input::new(InputKind::Select, "f", "role").with_options([("a", "Admin"), ("u", "User")]);
        input.set_value("u");
        let html = input.render().into_string();
        assert!(html.contains(r#"<option value="a">Admin</option>"#));
        assert!(html.contains(r#"<option value="u" selected>User</option>"#));
    }

    #[test]
    fn test_radio_per_option() {
        let mut input = Input::new(InputKind::Gender, "f", "gender");
        input.set_value("f");
        let html = input.render().into_string();
        assert!(html.contains(r#"id="f.gender.m""#));
        assert!(html.contains(r#"<input type="radio" id="f.gender.f" name="gender" value="f" checked>Female</label>"#));
    }

    #[test]
    fn test_checkbox_checked_when_truthy() {
        let mut input = Input::new(InputKind::Checkbox, "", "terms");
        assert!(!input.render().into_string().contains("checked"));
        input.set_value("On");
        assert!(input.render().into_string().contains(" checked"));
    }

    #[test]
    fn test_datalist_links_list() {
        let input = Input::new(InputKind::Datalist, "f", "city").with_options([("scl", "Santiago")]);
        let html = input.render().into_string();
        assert!(html.contains(r#"list="f.city-list""#));
        assert!(html.contains(r#"<datalist id="f.city-list"><option value="scl">Santiago</option></datalist>"#));
    }

    #[test]
    fn test_extension_attributes_are_escaped() {
        let mut input = Input::new(InputKind::Text, "", "name");
        input.add_attribute("data-x", "<\"q\">");
        assert!(input
            .render()
            .into_string()
            .contains(r#"data-x="&lt;&quot;q&quot;&gt;""#));
    }
}
