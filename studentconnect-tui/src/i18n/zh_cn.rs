//! 中文翻译 (zh-CN)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "StudentConnect",
        confirm: "确认",
        cancel: "取消",
        close: "关闭",
        back: "返回",
        next: "下一步",
        prev: "上一步",
        search: "搜索",
        all: "全部",
        error: "错误",
        optional: "可选",
    },

    hints: HintTexts {
        switch_panel: "切换面板",
        navigate: "导航",
        open: "打开",
        search: "搜索",
        filter: "筛选",
        next_step: "下一步",
        prev_step: "上一步",
        submit: "提交",
        select_file: "加载预览",
        theme: "主题",
        language: "语言",
        help: "帮助",
        quit: "退出",
        login: "登录",
    },

    nav: NavTexts {
        title: "菜单",
        overview: "概览",
        create_event: "创建活动",
        profile: "个人资料",
        discover: "发现活动",
        event_details: "活动详情",
        about: "关于",
        logout: "退出登录",
    },

    welcome: WelcomeTexts {
        title: "欢迎使用 StudentConnect",
        subtitle: "发现黑客松、工作坊与实习机会，或发布你自己的活动",
        login_hint: "按 Enter 登录或注册",
    },

    overview: OverviewTexts {
        total: "活动总数",
        pending: "待审核",
        approved: "已通过",
        my_events: "我的活动",
        no_events: "没有符合搜索条件的活动。",
        col_title: "标题",
        col_category: "类别",
        col_date: "日期",
        col_status: "状态",
    },

    discover: DiscoverTexts {
        search_placeholder: "按标题、组织者或地点搜索...",
        filter: "类别",
        no_events: "未找到活动。",
        organizer: "组织者",
        location: "地点",
    },

    details: DetailsTexts {
        about: "活动简介",
        topics: "你将学到",
        time: "时间",
        mode: "形式",
        price: "费用",
        speaker: "讲者",
        participants: "参与人数",
        date: "日期",
        no_selection: "请在发现页选择一个活动查看详情。",
    },

    create_event: CreateEventTexts {
        step: "步骤",
        step_basics: "基本信息",
        step_schedule: "时间地点",
        step_details: "详细信息",
        step_media: "媒体",
        submit: "提交活动",
        submitting: "提交中...",
        title: "活动标题",
        category: "类别",
        description: "活动描述",
        date: "日期 (YYYY-MM-DD)",
        time: "时间 (HH:MM)",
        location: "地点",
        event_link: "活动链接",
        contact_email: "联系邮箱",
        requirements: "参与要求",
        prizes: "奖品",
        flyer: "活动海报",
        flyer_hint: "图片文件路径，按 Enter 预览",
        preview_ready: "海报预览已加载",
    },

    profile: ProfileTexts {
        name: "姓名",
        mobile: "手机号",
        avatar: "头像",
        avatar_hint: "图片文件路径，按 Enter 预览",
        save: "保存修改",
        saving: "保存中...",
        preview_ready: "头像预览已加载",
    },

    modal: ModalTexts {
        auth: AuthModalTexts {
            title: "欢迎",
            student: "学生",
            organizer: "组织者",
            login: "登录",
            signup: "注册",
            email: "邮箱",
            password: "密码",
            confirm_password: "确认密码",
            show_password: "显示",
            hide_password: "隐藏",
            switch_tab: "学生 / 组织者",
            switch_mode: "登录 / 注册",
        },
        logout_title: "退出登录",
        logout_message: "确定要退出登录吗？",
        about_title: "关于 StudentConnect",
        about_body: "StudentConnect 连接学生与活动组织者。组织者发布黑客松、工作坊和实习，学生发现并参与。",
        help_title: "快捷键",
        help_lines: &[
            ("Tab", "在菜单和内容之间切换"),
            ("↑↓", "移动选中项 / 字段"),
            ("Enter", "打开 / 确认"),
            ("/", "搜索活动"),
            ("←→", "切换类别"),
            ("Alt+n / Alt+p", "表单下一步 / 上一步"),
            ("Alt+s", "提交表单"),
            ("Alt+r", "重新加载活动"),
            ("Alt+t", "切换主题"),
            ("Alt+l", "切换语言"),
            ("Esc", "返回 / 关闭"),
            ("Alt+q", "退出"),
        ],
        notice_title: "提示",
    },

    status_bar: StatusBarTexts {
        refreshed: "活动已刷新",
        auto_refresh: "自动刷新",
        auto_refresh_paused: "已暂停",
        event_submitted: "活动已提交审核",
        profile_saved: "资料已保存",
        welcome_back: "已登录",
    },
};
