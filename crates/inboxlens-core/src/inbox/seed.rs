//! Demo inbox shown on first launch and after a session reset.

use chrono::{DateTime, Duration, Utc};

use super::model::{StagedEmail, StagedId};

/// `(sender, subject, body, minutes before now)`.
const SAMPLES: &[(&str, &str, &str, i64)] = &[
    (
        "sep@uit.edu.vn",
        "KHẨN: Phê duyệt ngân sách quý 4",
        "Chào bạn,\n\nTôi cần bạn phê duyệt đề xuất ngân sách Q4 trước 5 giờ chiều nay. \
         Vui lòng xem xét tài liệu đính kèm và cho tôi biết nếu có bất kỳ thắc mắc nào.\n\nCảm ơn bạn!",
        2 * 60,
    ),
    (
        "nguyenvana@gmail.com",
        "Hẹn cafe cuối tuần này nhé?",
        "Chào bạn!\n\nLâu rồi không gặp. Mình hẹn đi cafe chiều thứ 7 này được không? \
         Khoảng 3 giờ chiều tại Highlands Coffee The Garden nhé.\n\nHy vọng bạn rảnh!",
        5 * 60,
    ),
    (
        "newsletter@techviet.vn",
        "Bản tin công nghệ tuần này - Đột phá AI mới",
        "Bản tin công nghệ hàng tuần của bạn đã đến!\n\nTuần này: Những đột phá mới về AI, \
         ra mắt smartphone flagship, và cập nhật về cloud computing. \
         Đọc ngay để không bỏ lỡ tin tức công nghệ hot nhất!",
        24 * 60,
    ),
    (
        "billing@techcombank.vn",
        "Thông báo: Đến hạn thanh toán thẻ tín dụng",
        "Kính gửi Quý khách,\n\nSố tiền thanh toán tối thiểu của thẻ tín dụng là 2.500.000 VNĐ, \
         đến hạn ngày 25/10/2025. Vui lòng thanh toán đúng hạn để tránh phí phạt.\n\nTrân trọng,\nTechcombank",
        2 * 24 * 60,
    ),
    (
        "support@shopee.vn",
        "Đơn hàng của bạn đang được giao",
        "Xin chào!\n\nĐơn hàng #SH12345 của bạn đã được giao cho đơn vị vận chuyển và sẽ đến \
         trong 2-3 ngày làm việc. Bạn có thể theo dõi đơn hàng qua link bên dưới.\n\n\
         Cảm ơn bạn đã mua sắm tại Shopee!",
        3 * 24 * 60,
    ),
    (
        "hr@fpt.com.vn",
        "Mời phỏng vấn vòng 2 - Vị trí Senior Developer",
        "Kính gửi ứng viên,\n\nChúng tôi rất vui mừng thông báo bạn đã vượt qua vòng 1. \
         Vòng phỏng vấn 2 sẽ diễn ra vào 9h sáng thứ 5 tuần sau tại văn phòng FPT Tower.\n\n\
         Vui lòng xác nhận tham dự.\n\nTrân trọng,\nPhòng Nhân Sự",
        6 * 60,
    ),
    (
        "noreply@lazada.vn",
        "🎉 Flash Sale 50% - Chỉ 2 giờ duy nhất!",
        "FLASH SALE SIÊU HỜI! 🔥\n\nGiảm 50% toàn bộ sản phẩm điện tử trong 2 giờ!\n\n\
         ⏰ Từ 20:00 - 22:00 tối nay\n💳 Giảm thêm 200K cho đơn từ 1 triệu\n🚚 Freeship toàn quốc\n\n\
         Nhanh tay kẻo hết!",
        30,
    ),
    (
        "security@vnpay.vn",
        "Cảnh báo: Phát hiện đăng nhập bất thường",
        "Kính gửi Quý khách,\n\nHệ thống phát hiện đăng nhập từ địa chỉ IP lạ vào lúc 14:30 hôm nay. \
         Nếu đây không phải là bạn, vui lòng đổi mật khẩu ngay lập tức.\n\n\
         Địa điểm: Hà Nội\nThiết bị: Windows PC\n\nBảo mật tài khoản của bạn!",
        4 * 60,
    ),
    (
        "alumni@uit.edu.vn",
        "Thông báo: Gặp mặt cựu sinh viên K19 - Ngày 28/10",
        "Thân gửi các bạn cựu sinh viên K19,\n\nKhoa CNTT sẽ tổ chức buổi gặp mặt cựu sinh viên \
         vào ngày 28/10/2025 tại hội trường A.\n\nChương trình:\n- Chia sẻ kinh nghiệm nghề nghiệp\n\
         - Giao lưu và networking\n- Tiệc buffet\n\nMong các bạn sắp xếp tham dự!",
        18 * 60,
    ),
    (
        "admin@coursera.org",
        "Chứng chỉ \"AI for Everyone\" đã sẵn sàng!",
        "Congratulations!\n\nBạn đã hoàn thành khóa học \"AI for Everyone\" với điểm số xuất sắc. \
         Chứng chỉ của bạn đã sẵn sàng để tải xuống.\n\n📜 Xem chứng chỉ\n🔗 Chia sẻ lên LinkedIn\n\n\
         Chúc mừng thành tích của bạn!",
        12 * 60,
    ),
    (
        "lottery@vietlott.vn",
        "Chúc mừng! Bạn trúng giải may mắn 50 triệu đồng",
        "CHÚC MỪNG QUÝ KHÁCH!\n\nEmail của bạn được chọn ngẫu nhiên trong chương trình quay số \
         may mắn. Bạn đã trúng 50.000.000 VNĐ!\n\nĐể nhận thưởng, vui lòng cung cấp:\n- CMND/CCCD\n\
         - Số tài khoản ngân hàng\n- Phí xử lý: 5.000.000 VNĐ\n\nLiên hệ ngay: 0123456789",
        8 * 60,
    ),
    (
        "pmproject@vng.com.vn",
        "Họp review sprint - Thứ 3 lúc 2PM",
        "Hi team,\n\nChúng ta sẽ có buổi họp review sprint vào thứ 3 tuần này lúc 2PM tại phòng họp 301.\n\n\
         Agenda:\n- Demo tính năng mới\n- Retrospective\n- Planning sprint tiếp theo\n\n\
         Chuẩn bị demo của các bạn nhé!\n\nThanks,\nPM",
        27 * 60,
    ),
    (
        "health@medlatec.vn",
        "Kết quả xét nghiệm sức khỏe định kỳ",
        "Kính gửi Quý khách,\n\nKết quả xét nghiệm sức khỏe định kỳ của bạn đã có. \
         Các chỉ số đều nằm trong giới hạn bình thường.\n\nChi tiết:\n\
         - Huyết áp: 120/80 mmHg (Bình thường)\n- Đường huyết: 95 mg/dL (Bình thường)\n\
         - Cholesterol: 180 mg/dL (Bình thường)\n\nHẹn gặp lại bạn trong đợt khám kế tiếp!",
        53 * 60,
    ),
    (
        "events@googlevn.com",
        "Mời tham dự: Google Cloud Summit Vietnam 2025",
        "Xin chào,\n\nGoogle Cloud sẽ tổ chức sự kiện Summit Vietnam 2025 vào ngày 15/11 \
         tại JW Marriott Hanoi.\n\nHighlights:\n🎯 Keynote từ Google Cloud Leaders\n\
         🚀 Workshops về AI/ML, Data Analytics\n🤝 Networking với 500+ IT professionals\n\
         🎁 Quà tặng hấp dẫn\n\nĐăng ký miễn phí: [Link]\n\nSố lượng có hạn!",
        4 * 24 * 60,
    ),
    (
        "tranthib@yahoo.com",
        "Nhờ review code pull request #234",
        "Chào anh/chị,\n\nEm vừa tạo pull request #234 để implement tính năng email scheduling. \
         Anh/chị có thể review giúp em được không ạ?\n\nChanges:\n- Thêm API endpoint /api/schedule\n\
         - UI modal chọn thời gian\n- Unit tests\n\nEm cảm ơn anh/chị nhiều!\n\nTrân trọng,\nTrần Thị B",
        7 * 60,
    ),
    (
        "ceo@techstartup.vn",
        "Đề xuất hợp tác chiến lược - Dự án AI Email Assistant",
        "Kính gửi Anh/Chị,\n\nTôi là Nguyễn Văn An, CEO của TechStartup Vietnam. Chúng tôi đã theo dõi \
         dự án AI Email Assistant của team anh/chị và rất ấn tượng với những tính năng thông minh \
         mà hệ thống cung cấp.\n\nCÁC ĐIỂM NỔI BẬT CỦA ĐỀ XUẤT:\n\n\
         1. TÍCH HỢP TECHNICAL:\n   - Tích hợp AI Email Assistant vào CRM platform của chúng tôi\n\
         \x20  - API endpoints để xử lý batch emails (lên tới 1000 emails/ngày)\n\n\
         2. BUSINESS MODEL:\n   - Revenue sharing: 60-40\n\
         \x20  - Subscription-based pricing: 500K-2M VNĐ/tháng tùy package\n\n\
         3. MARKETING & GROWTH:\n   - TechStartup có sales team 20 người để approach khách hàng\n\
         \x20  - Hiện tại có 500 active customers sẵn sàng dùng thử\n\n\
         Rất mong nhận được phản hồi sớm từ anh/chị.\n\nTrân trọng,\nNguyễn Văn An\nCEO, TechStartup Vietnam",
        10 * 60,
    ),
    (
        "professor@uit.edu.vn",
        "Phản hồi về đồ án tốt nghiệp - Cần chỉnh sửa và bổ sung",
        "Chào em Nguyễn Văn B,\n\nThầy đã xem xét kỹ báo cáo đồ án tốt nghiệp \
         \"AI Email Assistant - Multi-Agent System\" mà em nộp hôm 15/10. Nhìn chung, đây là một \
         đề tài rất hay và có tính ứng dụng cao. Tuy nhiên, thầy có một số nhận xét và yêu cầu \
         chỉnh sửa để em hoàn thiện hơn trước khi bảo vệ.\n\nĐIỂM MẠNH CỦA ĐỒ ÁN:\n\n\
         1. Ý TƯỞNG VÀ ĐỘNG LỰC:\n   ✓ Đề tài giải quyết vấn đề thực tế (email overload)\n\
         \x20  ✓ Ứng dụng multi-agent architecture một cách sáng tạo\n\n\
         2. KẾT QUẢ THỰC NGHIỆM:\n   ✓ Accuracy classification: 92% trên test set 500 emails\n\
         \x20  ✓ Processing time: 2-3 giây/email là acceptable\n\n\
         Em chỉnh sửa và gửi lại trước thứ 6 tuần sau nhé.\n\nThầy",
        15 * 60,
    ),
];

/// Builds the demo inbox relative to `now`.
///
/// Ids are stable (`sample-1` ...), so the result depends only on `now`.
#[must_use]
pub fn sample_inbox(now: DateTime<Utc>) -> Vec<StagedEmail> {
    SAMPLES
        .iter()
        .enumerate()
        .map(|(i, (sender, subject, body, minutes_ago))| StagedEmail {
            id: StagedId::new(format!("sample-{}", i + 1)),
            sender: (*sender).to_string(),
            subject: (*subject).to_string(),
            body: (*body).to_string(),
            received_at: Some(now - Duration::minutes(*minutes_ago)),
        })
        .collect()
}

/// Builds the demo emails again with freshly generated ids.
///
/// Used when samples are added to an inbox that may already have been
/// processed, so a reloaded sample never reuses a processed id.
#[must_use]
pub fn reload_samples(now: DateTime<Utc>) -> Vec<StagedEmail> {
    sample_inbox(now)
        .into_iter()
        .map(|email| StagedEmail {
            id: StagedId::generate(),
            ..email
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::BTreeSet;

    #[test]
    fn test_sample_inbox_is_deterministic() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        let a = sample_inbox(now);
        let b = sample_inbox(now);
        assert_eq!(a, b);
        assert_eq!(a.len(), 17);
        assert_eq!(a[0].id.as_str(), "sample-1");
        assert_eq!(a[0].received_at, Some(now - Duration::hours(2)));
    }

    #[test]
    fn test_sample_inbox_ids_unique_and_recent() {
        let now = Utc::now();
        let inbox = sample_inbox(now);
        let ids: BTreeSet<_> = inbox.iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids.len(), inbox.len());
        for email in &inbox {
            let received = email.received_at.unwrap();
            assert!(received < now);
            assert!(now - received <= Duration::days(4));
            assert!(!email.sender.is_empty());
            assert!(!email.subject.is_empty());
        }
    }

    #[test]
    fn test_reload_samples_use_fresh_ids() {
        let now = Utc::now();
        let seeded = sample_inbox(now);
        let reloaded = reload_samples(now);
        assert_eq!(reloaded.len(), seeded.len());

        let seeded_ids: BTreeSet<_> = seeded.iter().map(|e| e.id.clone()).collect();
        let reloaded_ids: BTreeSet<_> = reloaded.iter().map(|e| e.id.clone()).collect();
        assert_eq!(reloaded_ids.len(), reloaded.len());
        assert!(seeded_ids.is_disjoint(&reloaded_ids));
        assert_eq!(reloaded[0].subject, seeded[0].subject);
        assert_eq!(reloaded[0].received_at, seeded[0].received_at);
    }
}
