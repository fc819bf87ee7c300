use crate::domain::model::{Profile, RenderedSite};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    /// External profile file; `None` renders the embedded profile.
    fn profile_path(&self) -> Option<&str>;
    fn page_title(&self, profile: &Profile) -> String;
    fn footer_year(&self) -> i32;
    fn footer_note(&self) -> &str;
    fn contact_heading(&self) -> &str;
    fn contact_message(&self) -> &str;
    fn language(&self) -> &str;
    fn scroll_offset(&self) -> f64;
    /// Zip bundle filename when archiving is enabled.
    fn archive_filename(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn gather(&self) -> Result<Profile>;
    async fn render(&self, profile: Profile) -> Result<RenderedSite>;
    async fn publish(&self, site: RenderedSite) -> Result<String>;
}
