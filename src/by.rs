/// An element locator strategy, mirroring the handful Selenium-style
/// bindings settled on. Everything except [`By::XPath`] lowers to a CSS
/// selector; `XPath` is evaluated verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum By {
    Id(String),
    XPath(String),
    Name(String),
    TagName(String),
    ClassName(String),
    Selector(String),
}

impl By {
    pub fn id(value: impl Into<String>) -> Self {
        By::Id(value.into())
    }

    pub fn xpath(value: impl Into<String>) -> Self {
        By::XPath(value.into())
    }

    pub fn name(value: impl Into<String>) -> Self {
        By::Name(value.into())
    }

    pub fn tag_name(value: impl Into<String>) -> Self {
        By::TagName(value.into())
    }

    pub fn class_name(value: impl Into<String>) -> Self {
        By::ClassName(value.into())
    }

    pub fn selector(value: impl Into<String>) -> Self {
        By::Selector(value.into())
    }

    /// Either a CSS selector ready to hand to `DOM.querySelector`, or an
    /// XPath expression that the caller must dispatch through the XPath
    /// lookup path instead.
    pub(crate) fn resolve(&self) -> Locator<'_> {
        match self {
            By::Id(value) => Locator::Css(format!("[id=\"{value}\"]").into()),
            By::XPath(value) => Locator::XPath(value.as_str().into()),
            By::Name(value) => Locator::Css(format!("[name=\"{value}\"]").into()),
            By::TagName(value) => Locator::Css(value.as_str().into()),
            By::ClassName(value) => Locator::Css(format!(".{value}").into()),
            By::Selector(value) => Locator::Css(value.as_str().into()),
        }
    }
}

pub(crate) enum Locator<'a> {
    Css(std::borrow::Cow<'a, str>),
    XPath(std::borrow::Cow<'a, str>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_and_class_lower_to_css() {
        assert!(matches!(By::id("foo").resolve(), Locator::Css(c) if c == "[id=\"foo\"]"));
        assert!(matches!(By::class_name("foo").resolve(), Locator::Css(c) if c == ".foo"));
    }

    #[test]
    fn xpath_stays_xpath() {
        assert!(matches!(By::xpath("//div").resolve(), Locator::XPath(x) if x == "//div"));
    }

    #[test]
    fn tag_name_used_verbatim() {
        assert!(matches!(By::tag_name("input").resolve(), Locator::Css(c) if c == "input"));
    }
}
