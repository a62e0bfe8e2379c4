//! Page components rendered to HTML
//!
//! Components take validated props and produce markup; they hold no state.

use crate::error::HeaderError;
use std::fmt::Write;

/// A stateless component
pub trait Component {
    /// Input of [`Component::render`]
    type Props;

    /// Render `props` to markup
    fn render(props: &Self::Props) -> String;
}

/// Escape text for use inside a double-quoted attribute or element body
#[must_use]
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Props of [`AppHeader`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderProps {
    home: String,
    back: bool,
    login: Option<String>,
    register: Option<String>,
}

impl HeaderProps {
    /// Props linking the logo to `home`
    ///
    /// # Errors
    /// `HeaderError::MissingHome` if `home` is empty
    pub fn new(home: impl Into<String>) -> Result<Self, HeaderError> {
        let home = home.into();
        if home.is_empty() {
            return Err(HeaderError::MissingHome);
        }
        Ok(Self {
            home,
            back: false,
            login: None,
            register: None,
        })
    }

    /// With a "Voltar" link to `home`
    #[inline]
    #[must_use]
    pub fn with_back(mut self) -> Self {
        self.back = true;
        self
    }

    /// With an "Entrar" link
    #[inline]
    #[must_use]
    pub fn with_login(mut self, route: impl Into<String>) -> Self {
        self.login = Some(route.into()).filter(|r: &String| !r.is_empty());
        self
    }

    /// With a "Criar conta" link
    #[inline]
    #[must_use]
    pub fn with_register(mut self, route: impl Into<String>) -> Self {
        self.register = Some(route.into()).filter(|r: &String| !r.is_empty());
        self
    }

    /// Logo and "Voltar" target
    #[inline]
    #[must_use]
    pub fn home(&self) -> &str {
        &self.home
    }
}

/// Site header: logo plus optional navigation links
#[derive(Debug, Clone, Copy, Default)]
pub struct AppHeader;

impl Component for AppHeader {
    type Props = HeaderProps;

    fn render(props: &HeaderProps) -> String {
        let home = escape_html(&props.home);
        let entries = [
            props.back.then_some((props.home.as_str(), "Voltar")),
            props.login.as_deref().map(|route| (route, "Entrar")),
            props.register.as_deref().map(|route| (route, "Criar conta")),
        ];
        let mut links = String::new();
        for (route, text) in entries.into_iter().flatten() {
            let _ = write!(
                links,
                "\n      <li><a href=\"{}\">{text}</a></li>",
                escape_html(route)
            );
        }

        format!(
            r#"<link rel="stylesheet" href="/static/css/app-header.css" />
<header class="header">
  <a href="{home}"><img src="/static/images/logo/logo-transparent.png" /></a>
  <nav>
    <ul>{links}
    </ul>
  </nav>
</header>
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_mandatory() {
        assert_eq!(HeaderProps::new(""), Err(HeaderError::MissingHome));
    }

    #[test]
    fn renders_only_requested_links() {
        let html = AppHeader::render(&HeaderProps::new("/").unwrap().with_login("/entrar"));

        assert!(html.contains(r#"<a href="/"><img"#));
        assert!(html.contains(r#"<li><a href="/entrar">Entrar</a></li>"#));
        assert!(!html.contains("Voltar"));
        assert!(!html.contains("Criar conta"));
    }

    #[test]
    fn back_links_home() {
        let props = HeaderProps::new("/inicio")
            .unwrap()
            .with_back()
            .with_register("/criar-conta");
        let html = AppHeader::render(&props);

        let back = html.find(r#"<li><a href="/inicio">Voltar</a></li>"#).unwrap();
        let register = html.find(r#"<li><a href="/criar-conta">Criar conta</a></li>"#).unwrap();
        assert!(back < register);
    }

    #[test]
    fn empty_routes_are_skipped() {
        let html = AppHeader::render(&HeaderProps::new("/").unwrap().with_login(""));
        assert!(!html.contains("Entrar"));
    }

    #[test]
    fn attributes_are_escaped() {
        let html = AppHeader::render(
            &HeaderProps::new("/\"><script>").unwrap().with_login("/a?b=1&c=2"),
        );
        assert!(html.contains(r#"href="/&quot;&gt;&lt;script&gt;""#));
        assert!(html.contains(r#"href="/a?b=1&amp;c=2""#));
        assert!(!html.contains("<script>"));
    }
}
