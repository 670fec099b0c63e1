use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Ru,
}

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=En (default)

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Lang::Ru,
        _ => Lang::En,
    }
}

pub fn set_lang(l: Lang) {
    CURRENT_LANG.store(
        match l {
            Lang::En => 0,
            Lang::Ru => 1,
        },
        Ordering::Relaxed,
    );
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let ru = lang() == Lang::Ru;
    match key {
        // ── Header ──────────────────────────────────────────
        "header.home" => if ru { "Главная" } else { "Home" },
        "header.features" => if ru { "Возможности" } else { "Features" },
        "header.about" => if ru { "О проекте" } else { "About" },
        "header.sign_up" => if ru { "Регистрация" } else { "Sign Up" },
        "header.preferences_tip" => if ru { "Настройки" } else { "Preferences" },

        // ── Chat ────────────────────────────────────────────
        "chat.placeholder" => if ru { "Введите сообщение..." } else { "Type a message..." },
        "chat.send_tip" => if ru { "Отправить (Enter)" } else { "Send (Enter)" },
        "chat.generating" => if ru { "Генерирую физическую симуляцию..." } else { "Generating physics simulation..." },
        "chat.new" => if ru { "Новый диалог" } else { "New chat" },
        "chat.new_tip" => if ru { "Начать диалог заново" } else { "Start the conversation over" },

        // ── Video panel ─────────────────────────────────────
        "video.play" => if ru { "Воспроизвести" } else { "Play" },
        "video.play_tip" => if ru { "Открыть в системном проигрывателе" } else { "Open in the system video player" },
        "video.export" => if ru { "Экспорт" } else { "Export" },
        "video.original" => if ru { "Исходное видео" } else { "Original Video" },
        "video.alembic" => if ru { "Alembic-файл" } else { "Alembic File" },
        "video.alembic_tip" => if ru { "Alembic-экспорт недоступен для этой симуляции" } else { "No Alembic export for this simulation" },
        "video.export_video_title" => if ru { "Экспорт видео" } else { "Export Video" },
        "video.export_alembic_title" => if ru { "Экспорт Alembic" } else { "Export Alembic" },

        // ── Status bar ──────────────────────────────────────
        "status.ready" => if ru { "Готово" } else { "Ready" },
        "status.messages" => if ru { "Сообщений" } else { "Messages" },
        "status.generating" => if ru { "Симуляция..." } else { "Simulating..." },

        // ── Preferences window ──────────────────────────────
        "settings.title" => if ru { "Настройки" } else { "Preferences" },
        "settings.general" => if ru { "Общие" } else { "General" },
        "settings.language" => if ru { "Язык" } else { "Language" },
        "settings.ui" => if ru { "Интерфейс" } else { "Interface" },
        "settings.font_size" => if ru { "Размер шрифта" } else { "Font size" },
        "settings.chat" => if ru { "Диалог" } else { "Conversation" },
        "settings.delay" => if ru { "Задержка ответа (мс)" } else { "Reply delay (ms)" },
        "settings.delay_hint" => if ru { "Имитация времени обработки" } else { "Simulated processing time" },
        "settings.assets" => if ru { "Ресурсы" } else { "Assets" },
        "settings.assets_root" => if ru { "Каталог ресурсов" } else { "Asset directory" },
        "settings.browse" => if ru { "Обзор..." } else { "Browse..." },
        "settings.browse_title" => if ru { "Выбрать каталог ресурсов" } else { "Choose Asset Directory" },
        "settings.apply" => if ru { "Применить" } else { "Apply" },
        "settings.reset" => if ru { "Сбросить" } else { "Reset" },
        "settings.close" => if ru { "Закрыть" } else { "Close" },

        // ── Fallback ────────────────────────────────────────
        _ => "???",
    }
}
