//! 校验表单更新逻辑

use key_validator_provider::log_sanitizer::mask_secret;
use key_validator_provider::ProviderError;

use crate::backend::ValidationBackend;
use crate::message::{ValidationOutcome, ValidatorMessage};
use crate::model::state::{MSG_GENERIC_FAILURE, MSG_INVALID_KEY, MSG_KEY_REQUIRED};
use crate::model::{App, ValidatorState};

/// 处理表单消息
pub fn update(app: &mut App, msg: ValidatorMessage, backend: &dyn ValidationBackend) {
    let state = &mut app.validator;

    match msg {
        ValidatorMessage::Input(ch) => state.insert_char(ch),
        ValidatorMessage::Paste(text) => state.insert_str(&text),
        ValidatorMessage::Backspace => state.backspace(),
        ValidatorMessage::Delete => state.delete(),
        ValidatorMessage::Clear => state.update_credential(String::new()),
        ValidatorMessage::CursorLeft => state.cursor_left(),
        ValidatorMessage::CursorRight => state.cursor_right(),
        ValidatorMessage::CursorHome => state.cursor_home(),
        ValidatorMessage::CursorEnd => state.cursor_end(),

        ValidatorMessage::Submit => {
            submit(state, backend);
            app.clear_status();
        }

        ValidatorMessage::ToggleMask => {
            state.mask_input = !state.mask_input;
            let status = &crate::i18n::t(app.language).status;
            let text = if app.validator.mask_input {
                status.key_masked
            } else {
                status.key_visible
            };
            app.set_status(text);
        }

        ValidatorMessage::Finished {
            request_id,
            outcome,
        } => finish(state, request_id, outcome),
    }
}

/// 提交校验
///
/// 按钮禁用（请求进行中）时不产生任何状态变化；空输入直接报错。
/// 同一时刻最多一个请求。
fn submit(state: &mut ValidatorState, backend: &dyn ValidationBackend) {
    if state.trigger_disabled() {
        log::debug!("submit ignored: request {:?} still in flight", state.in_flight);
        return;
    }

    if state.credential.is_empty() {
        state.error = Some(MSG_KEY_REQUIRED.to_string());
        return;
    }

    let request_id = state.begin_request();
    log::debug!(
        "request #{request_id} submitted for {}",
        mask_secret(&state.credential)
    );
    backend.dispatch(request_id, state.credential.clone());
}

/// 处理请求结果
///
/// 先复位 busy，再写入结果。编号不匹配的结果被丢弃。
fn finish(state: &mut ValidatorState, request_id: u64, outcome: ValidationOutcome) {
    if !state.end_request(request_id) {
        log::debug!("discarding stale result for request #{request_id}");
        return;
    }

    match outcome {
        Ok(account) => {
            log::info!("request #{request_id}: key valid, balance {}", account.total_balance);
            state.account = Some(account);
        }
        Err(err) => {
            if err.is_expected() {
                log::warn!("request #{request_id}: {err}");
            } else {
                log::error!("request #{request_id}: {err}");
            }
            state.error = Some(failure_message(&err));
        }
    }
}

/// 把请求错误转换为展示给用户的消息
fn failure_message(err: &ProviderError) -> String {
    match err {
        ProviderError::InvalidCredentials { .. } => MSG_INVALID_KEY.to_string(),
        other => other
            .detail()
            .map_or_else(|| MSG_GENERIC_FAILURE.to_string(), ToString::to_string),
    }
}
