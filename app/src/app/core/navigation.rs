use super::*;
use crate::fs_op::path::{Navigation, PathStyle};

impl App {
    /// `cd <target>`. Runs synchronously; nothing on disk is checked.
    ///
    /// A relative target is ignored with a warning rather than resolved.
    pub fn cd(&mut self, target: &str) -> Navigation {
        let outcome = self.resolver.navigate(target);
        if let Navigation::Ignored(ref t) = outcome {
            tracing::warn!("cd: ignoring non-absolute path `{}`", t);
            self.outlets.warn(format!("cd:  Not an absolute path:  \"{}\"", t));
        }
        outcome
    }

    /// `getdir`: send the current directory out of outlet 0.
    pub fn getdir(&self) {
        self.outlets.dir(self.resolver.base_dir());
    }

    /// `postdir`: post the current directory in every rendering style.
    pub fn postdir(&self) {
        for style in PathStyle::ALL {
            self.outlets
                .post(format!("{}:  {}", style.label(), self.resolver.render(style)));
        }
        self.outlets
            .post(format!("Current directory:  {}", self.resolver.base_dir()));
    }
}
