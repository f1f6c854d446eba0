//!
//! src/app.rs
//! 主循环
//!
//!     loop {
//!         1. 渲染 UI                     view::render
//!         2. 检查退出标志
//!         3. 取回已完成的图片预览        App::apply_preview_results
//!         4. 自动刷新计时                App::tick
//!         5. 轮询事件（100ms 超时）      event::poll_event
//!         6. 事件 → 消息 → 更新状态       event::handle_event / update::update
//!     }
//!
//! 预览读取在 tokio 运行时上进行，主循环只在每一轮开头收取结果，
//! 所以 100ms 的轮询超时也是预览显示的最大延迟。
//!

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询超时
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            log::info!("Quit requested");
            break;
        }

        // 3. 异步任务的结果
        app.apply_preview_results();
        app.tick(Instant::now());

        // 4. 轮询事件
        if let Some(event) = event::poll_event(POLL_TIMEOUT)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
