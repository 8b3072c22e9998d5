//! Localized user-facing messages
//!
//! Every message the orchestrator puts into a [`courtvoice_core::BookingResult`]
//! comes from here, keyed by response language. Business failures get
//! specific texts; system faults always map to the generic processing
//! error so backend details never reach the end user.

use chrono::{NaiveDate, NaiveTime};

use courtvoice_core::Language;

pub fn user_not_found(language: Language) -> &'static str {
    match language {
        Language::Russian => "Пользователь не найден",
        Language::English => "User not found",
        Language::Thai => "ไม่พบผู้ใช้",
    }
}

pub fn time_required(language: Language) -> &'static str {
    match language {
        Language::Russian => "Укажите дату и время бронирования",
        Language::English => "Please provide a date and time for the booking",
        Language::Thai => "กรุณาระบุวันที่และเวลาในการจอง",
    }
}

pub fn invalid_time_window(language: Language) -> &'static str {
    match language {
        Language::Russian => "Недопустимое время бронирования",
        Language::English => "The requested booking window is invalid",
        Language::Thai => "ช่วงเวลาจองไม่ถูกต้อง",
    }
}

pub fn no_courts(language: Language) -> &'static str {
    match language {
        Language::Russian => "Нет кортов, соответствующих запросу",
        Language::English => "No courts match the request",
        Language::Thai => "ไม่มีคอร์ตที่ตรงกับคำขอ",
    }
}

pub fn no_free_courts(language: Language) -> &'static str {
    match language {
        Language::Russian => "Нет свободных кортов на это время",
        Language::English => "No courts are available for that time",
        Language::Thai => "ไม่มีคอร์ตว่างในเวลาที่ต้องการ",
    }
}

pub fn no_active_bookings(language: Language) -> &'static str {
    match language {
        Language::Russian => "У вас нет активных бронирований",
        Language::English => "You have no active bookings to cancel",
        Language::Thai => "คุณไม่มีการจองที่ใช้งานอยู่",
    }
}

pub fn processing_error(language: Language) -> &'static str {
    match language {
        Language::Russian => "Ошибка обработки запроса, попробуйте позже",
        Language::English => "Processing error, please try again later",
        Language::Thai => "เกิดข้อผิดพลาดในการประมวลผล กรุณาลองใหม่",
    }
}

pub fn booking_confirmed(
    language: Language,
    court_name: &str,
    date: NaiveDate,
    start_time: NaiveTime,
) -> String {
    let time = start_time.format("%H:%M");
    match language {
        Language::Russian => format!("Корт {court_name} забронирован на {date} в {time}"),
        Language::English => format!("Court {court_name} is booked for {date} at {time}"),
        Language::Thai => format!("จองคอร์ต {court_name} วันที่ {date} เวลา {time} เรียบร้อยแล้ว"),
    }
}

pub fn booking_cancelled(language: Language, date: NaiveDate) -> String {
    match language {
        Language::Russian => format!("Бронирование на {date} отменено"),
        Language::English => format!("Your booking on {date} has been cancelled"),
        Language::Thai => format!("ยกเลิกการจองวันที่ {date} แล้ว"),
    }
}

pub fn availability_summary(language: Language, free_slots: usize) -> String {
    match language {
        Language::Russian => format!("Найдено свободных вариантов: {free_slots}"),
        Language::English => format!("Found {free_slots} available slots"),
        Language::Thai => format!("พบช่วงเวลาว่าง {free_slots} รายการ"),
    }
}

pub fn booking_next_steps(language: Language) -> Vec<String> {
    let steps: [&str; 2] = match language {
        Language::Russian => ["Добавить в календарь", "Пригласить игроков"],
        Language::English => ["Add to calendar", "Invite players"],
        Language::Thai => ["เพิ่มลงปฏิทิน", "ชวนผู้เล่น"],
    };
    steps.iter().map(|s| s.to_string()).collect()
}

pub fn availability_next_steps(language: Language) -> Vec<String> {
    let step = match language {
        Language::Russian => "Забронировать свободный слот",
        Language::English => "Book one of the available slots",
        Language::Thai => "จองช่วงเวลาที่ว่าง",
    };
    vec![step.to_string()]
}

pub fn cancel_next_steps(language: Language) -> Vec<String> {
    let step = match language {
        Language::Russian => "Забронировать новый корт",
        Language::English => "Book a new court",
        Language::Thai => "จองคอร์ตใหม่",
    };
    vec![step.to_string()]
}

/// Usage hint attached when an utterance was not recognized
pub fn usage_suggestion(language: Language) -> &'static str {
    match language {
        Language::Russian => "Попробуйте сказать: «Забронируй корт на завтра в 14:00»",
        Language::English => "Try saying: \"Book a court tomorrow at 14:00\"",
        Language::Thai => "ลองพูดว่า: \"จองคอร์ตพรุ่งนี้เวลา 14:00\"",
    }
}
