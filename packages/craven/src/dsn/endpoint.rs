use crate::dsn::Dsn;

impl Dsn {
    /// URL events are posted to: `{protocol}://{host}{path_prefix}api/{project_id}/store/`
    pub fn store_endpoint(&self) -> String {
        format!(
            "{}://{}{}api/{}/store/",
            self.protocol(),
            self.host(),
            self.path_prefix(),
            self.project_id()
        )
    }
}
