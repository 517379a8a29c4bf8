pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn verbose(&self) -> bool;
}
