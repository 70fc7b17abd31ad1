//! 后台任务调度

use futures::future::LocalBoxFuture;
use letterdesk::statement::BackgroundSpawner;

/// 在浏览器事件循环上运行，不等待结果
#[derive(Clone, Copy, Default)]
pub struct LocalSpawner;

impl BackgroundSpawner for LocalSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
