use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::components::{
    AlertBanner, BarChart, CardTone, ChartEntry, PieChart, ProgressCard, StatCard,
};
use crate::core::client::{FetchError, SheetsClient};
use crate::core::format;
use crate::core::report::ReportState;
use crate::core::session::ReportSession;

const BAR_COLOR: &str = "#4F46E5";
const TIET_COLORS: [&str; 3] = ["#B4E7FF", "#C1F2C7", "#FFE599"];

#[derive(Debug)]
enum ReportEvent {
    Refresh,
    Completed {
        generation: u64,
        outcome: Result<ReportState, FetchError>,
    },
    DismissAlert,
}

/// The whole dashboard: header with refresh, stat cards, progress cards,
/// the tiết buckets, and the two charts. Fetches once on mount and again on
/// every press of the refresh button.
#[component]
pub fn ReportView() -> Element {
    let session = use_signal(ReportSession::default);

    let sender_slot: Rc<RefCell<Option<UnboundedSender<ReportEvent>>>> =
        Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = {
        let session_ref = session.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<ReportEvent>| {
            let sender_slot = sender_slot_for_loop.clone();
            let mut session_signal = session_ref.clone();

            async move {
                let client = Rc::new(SheetsClient::new());

                while let Some(event) = rx.next().await {
                    match event {
                        ReportEvent::Refresh => {
                            let Some(generation) =
                                session_signal.with_mut(|session| session.begin_refresh())
                            else {
                                continue;
                            };
                            queue_fetch(sender_slot.clone(), client.clone(), generation);
                        }
                        ReportEvent::Completed {
                            generation,
                            outcome,
                        } => {
                            if let Err(err) = &outcome {
                                log::error!("lỗi khi lấy dữ liệu: {err}");
                            }
                            session_signal.with_mut(|session| {
                                session.complete(generation, outcome, format::now_stamp())
                            });
                        }
                        ReportEvent::DismissAlert => {
                            session_signal.with_mut(|session| session.dismiss_alert());
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    // Initial fetch on mount.
    use_effect(move || {
        coroutine.send(ReportEvent::Refresh);
    });

    let snapshot = session();
    let report = snapshot.report.clone();
    let loading = snapshot.loading;

    let install_progress = report.install_progress();
    let teacher_progress = report.teacher_progress();
    let install_progress_value = format::percent_value(report.installed, report.total_registered);
    let teacher_progress_value =
        format::percent_value(report.teachers_installed, report.total_teachers);
    let refresh_label = if loading { "Đang tải..." } else { "Làm mới dữ liệu" };

    let school_entries = vec![
        ChartEntry {
            label: "Tổng số trường".to_string(),
            value: report.total_registered,
            color: BAR_COLOR,
        },
        ChartEntry {
            label: "GV đăng ký".to_string(),
            value: report.approved_install,
            color: BAR_COLOR,
        },
        ChartEntry {
            label: "Đã cài đặt".to_string(),
            value: report.installed,
            color: BAR_COLOR,
        },
    ];
    let tiet_entries = vec![
        ChartEntry {
            label: "36 tiết".to_string(),
            value: report.install_36,
            color: TIET_COLORS[0],
        },
        ChartEntry {
            label: "72 tiết".to_string(),
            value: report.install_72,
            color: TIET_COLORS[1],
        },
        ChartEntry {
            label: "108 tiết".to_string(),
            value: report.install_108,
            color: TIET_COLORS[2],
        },
    ];

    rsx! {
        main { class: "report",
            header { class: "report__header",
                div { class: "report__heading",
                    h1 { "Báo cáo tiến độ cài phần mềm kỹ năng sống" }
                    p { class: "report__tagline", "Dữ liệu tự động từ Google Sheets" }
                    if let Some(stamp) = snapshot.last_update.as_ref() {
                        p { class: "report__stamp", "Cập nhật lần cuối: {stamp}" }
                    }
                }
                button {
                    r#type: "button",
                    class: "report__refresh",
                    disabled: loading,
                    onclick: move |_| coroutine.send(ReportEvent::Refresh),
                    "{refresh_label}"
                }
            }

            if let Some(message) = snapshot.alert.as_ref() {
                AlertBanner {
                    message: message.clone(),
                    on_dismiss: move |_| coroutine.send(ReportEvent::DismissAlert),
                }
            }

            div { class: "report__stats",
                StatCard {
                    title: "Tổng số trường",
                    value: report.total_registered,
                    tone: CardTone::Blue,
                }
                StatCard {
                    title: "GV đăng ký",
                    value: report.approved_install,
                    subtitle: format!("{} còn lại", report.not_yet_registered()),
                    tone: CardTone::Green,
                }
                StatCard {
                    title: "Đã cài đặt",
                    value: report.installed,
                    subtitle: format!("{install_progress}%"),
                    tone: CardTone::Indigo,
                }
                StatCard {
                    title: "Máy > 10",
                    value: report.more_than_10_pc,
                    subtitle: "trường",
                    tone: CardTone::Purple,
                }
            }

            div { class: "report__progress",
                ProgressCard {
                    title: "Tiến độ cài đặt",
                    value: format!("{install_progress}%"),
                    subtitle: format!("{}/{} trường", report.installed, report.total_registered),
                    progress: install_progress_value,
                    tone: CardTone::Blue,
                }
                ProgressCard {
                    title: "Giáo viên đã cài",
                    value: format!("{teacher_progress}%"),
                    subtitle: format!("{}/{} GV", report.teachers_installed, report.total_teachers),
                    progress: teacher_progress_value,
                    tone: CardTone::Green,
                }
                ProgressCard {
                    title: "Còn lại",
                    value: report.teachers_remaining().to_string(),
                    subtitle: "giáo viên chưa cài",
                    progress: 0.0,
                    tone: CardTone::Orange,
                }
            }

            div { class: "report__buckets",
                StatCard {
                    title: "36 tiết",
                    value: report.install_36,
                    subtitle: "trường đăng ký",
                    tone: CardTone::Blue,
                }
                StatCard {
                    title: "72 tiết",
                    value: report.install_72,
                    subtitle: "trường đăng ký",
                    tone: CardTone::Green,
                }
                StatCard {
                    title: "108 tiết",
                    value: report.install_108,
                    subtitle: "trường đăng ký",
                    tone: CardTone::Yellow,
                }
            }

            div { class: "report__charts",
                BarChart {
                    title: "Thống kê tổng quan",
                    entries: school_entries,
                }
                PieChart {
                    title: "Phân bổ số tiết đăng ký",
                    entries: tiet_entries,
                }
            }
        }
    }
}

fn queue_fetch(
    sender_slot: Rc<RefCell<Option<UnboundedSender<ReportEvent>>>>,
    client: Rc<SheetsClient>,
    generation: u64,
) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        spawn(async move {
            let outcome = client.fetch_report().await;
            let _ = sender.unbounded_send(ReportEvent::Completed {
                generation,
                outcome,
            });
        });
    }
}
