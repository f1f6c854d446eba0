//! 图片预览读取
//!
//! 读取在 tokio 运行时上执行，结果通过 channel 送回主循环。
//! 没有序号保护：多个读取同时进行时，以最后完成的为准。

use std::sync::Arc;

use studentconnect_core::services::{SelectedFile, read_as_data_url};
use studentconnect_core::traits::{FileReader, TokioFileReader};
use studentconnect_core::CoreResult;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// 预览显示位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewTarget {
    /// 个人资料头像
    Avatar,
    /// 活动海报
    Flyer,
}

/// 一次读取的结果
#[derive(Debug)]
pub struct PreviewResult {
    pub target: PreviewTarget,
    pub result: CoreResult<String>,
}

/// 预览读取器
pub struct PreviewWorker {
    runtime: Handle,
    reader: Arc<dyn FileReader>,
    tx: UnboundedSender<PreviewResult>,
    rx: UnboundedReceiver<PreviewResult>,
}

impl PreviewWorker {
    pub fn new(runtime: Handle) -> Self {
        Self::with_reader(runtime, Arc::new(TokioFileReader))
    }

    pub fn with_reader(runtime: Handle, reader: Arc<dyn FileReader>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            runtime,
            reader,
            tx,
            rx,
        }
    }

    /// 启动读取，不等待结果
    pub fn spawn(&self, target: PreviewTarget, file: SelectedFile) {
        let reader = Arc::clone(&self.reader);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = read_as_data_url(reader.as_ref(), &file).await;
            if let Err(e) = &result {
                log::warn!("Preview of {} failed: {e}", file.path.display());
            }
            // 接收端已关闭说明应用正在退出
            let _ = tx.send(PreviewResult { target, result });
        });
    }

    /// 取出所有已完成的结果（按完成顺序）
    pub fn drain(&mut self) -> Vec<PreviewResult> {
        let mut finished = Vec::new();
        while let Ok(result) = self.rx.try_recv() {
            finished.push(result);
        }
        finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn finished_reads_are_delivered_to_the_loop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.png");
        std::fs::write(&path, b"abc").unwrap();

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut worker = PreviewWorker::new(runtime.handle().clone());
        worker.spawn(PreviewTarget::Avatar, SelectedFile::from_path(&path));

        let mut results = Vec::new();
        for _ in 0..50 {
            results = worker.drain();
            if !results.is_empty() {
                break;
            }
            std::thread::sleep(Duration::from_millis(20));
        }

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].target, PreviewTarget::Avatar);
        assert_eq!(
            results[0].result.as_deref().unwrap(),
            "data:image/png;base64,YWJj"
        );
    }
}
