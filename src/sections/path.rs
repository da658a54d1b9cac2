use crate::display::Theme;
use crate::models::HookJson;
use crate::sections::Section;
use crate::utils::format_path;

/// Working directory, home-abbreviated.
pub struct PathSection<'a> {
    hook: &'a HookJson,
}

impl<'a> PathSection<'a> {
    pub fn new(hook: &'a HookJson) -> Self {
        Self { hook }
    }
}

impl Section for PathSection<'_> {
    fn name(&self) -> &'static str {
        "path"
    }

    fn render(&self, theme: &Theme) -> String {
        theme.paint(&format_path(self.hook), theme.palette.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_non_home_path_unchanged() {
        let hook = HookJson {
            cwd: "/srv/www".into(),
            ..Default::default()
        };
        assert_eq!(PathSection::new(&hook).render(&Theme::plain()), "/srv/www");
    }

    #[test]
    fn colored_path_uses_path_color() {
        let hook = HookJson {
            cwd: "/srv/www".into(),
            ..Default::default()
        };
        let out = PathSection::new(&hook).render(&Theme::colored());
        assert!(out.contains("/srv/www"));
        if cfg!(feature = "colors") {
            assert!(out.starts_with("\x1b[38;2;12;160;216m"), "got {out:?}");
        }
    }
}
