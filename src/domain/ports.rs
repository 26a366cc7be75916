use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn file_size(&self, path: &str) -> impl std::future::Future<Output = Result<u64>> + Send;
}

/// Everything a strip run needs to know, however it was configured.
pub trait StripSettings: Send + Sync {
    fn input(&self) -> &str;
    fn output(&self) -> Option<&str>;
    fn language(&self) -> Option<&str>;
    fn in_place(&self) -> bool;
    fn max_file_bytes(&self) -> u64;
}
