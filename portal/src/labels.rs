//! Every user-facing string of the portal, in English and Arabic.

use crate::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    // Shared
    LanguageButton,
    Email,
    EnterEmail,
    EmailRequired,
    EmailInvalid,
    Password,
    EnterPassword,
    PasswordRequired,
    ErrorOccurred,
    Error,
    Success,
    Login,
    HaveAccount,

    // Signup
    SignupTitle,
    NameEn,
    EnterNameEn,
    NameEnRequired,
    NameEnMin,
    NameEnMax,
    NameAr,
    EnterNameAr,
    NameArRequired,
    NameArMin,
    NameArMax,
    PhoneNumber,
    EnterPhone,
    PhoneRequired,
    PhoneInvalid,
    WebsiteUrl,
    EnterWebsite,
    WebsiteRequired,
    WebsiteInvalid,
    CompanyLogo,
    UploadLogo,
    LogoSelected,
    CreateAccount,
    Creating,
    SignupSuccess,

    // Login
    LoginTitle,
    LoggingIn,
    LoginSuccess,
    ForgotPasswordLink,
    NoAccount,
    SignupLink,

    // Forgot password
    ForgotPasswordTitle,
    ForgotPasswordDescription,
    SendOtp,
    Sending,
    OtpSent,

    // Set password
    SetPasswordTitle,
    Otp,
    EnterOtp,
    OtpRequired,
    OtpLength,
    NewPassword,
    EnterNewPassword,
    PasswordPolicy,
    PasswordHint,
    ConfirmPassword,
    EnterConfirmPassword,
    ConfirmPasswordRequired,
    PasswordsMismatch,
    Submit,
    Submitting,
    PasswordSetSuccess,
    ResendOtp,
    Resending,
    OtpResent,

    // Home
    HomeTitle,
    Welcome,
    Logout,
    NotFound,
}

impl Label {
    pub fn text(self, language: Language) -> &'static str {
        let (en, ar) = self.pair();
        match language {
            Language::En => en,
            Language::Ar => ar,
        }
    }

    fn pair(self) -> (&'static str, &'static str) {
        use Label::*;
        match self {
            LanguageButton => ("عربي", "EN"),
            Email => ("Email Address", "البريد الإلكتروني"),
            EnterEmail => ("Enter your email", "أدخل بريدك الإلكتروني"),
            EmailRequired => ("Email is required", "البريد الإلكتروني مطلوب"),
            EmailInvalid => {
                ("Enter a valid email address", "أدخل بريد إلكتروني صحيح")
            }
            Password => ("Password", "كلمة المرور"),
            EnterPassword => ("Enter your password", "أدخل كلمة المرور"),
            PasswordRequired => {
                ("Password should be required", "كلمة المرور مطلوبة")
            }
            ErrorOccurred => (
                "An error occurred. Please try again.",
                "حدث خطأ، حاول مرة أخرى.",
            ),
            Error => ("Error", "خطأ"),
            Success => ("Success", "نجاح"),
            Login => ("Login", "تسجيل الدخول"),
            HaveAccount => ("Already have an account?", "لديك حساب بالفعل؟"),

            SignupTitle => ("Signup", "تسجيل شركة"),
            NameEn => ("Company Name (English)", "اسم الشركة بالإنجليزية"),
            EnterNameEn => (
                "Enter company name in English",
                "أدخل اسم الشركة بالإنجليزية",
            ),
            NameEnRequired => (
                "Company name in English is required",
                "اسم الشركة بالإنجليزية مطلوب",
            ),
            NameEnMin => (
                "Company name in English must be at least 3 characters",
                "اسم الشركة بالإنجليزية يجب ألا يقل عن 3 أحرف",
            ),
            NameEnMax => (
                "Company name in English must not exceed 50 characters",
                "اسم الشركة بالإنجليزية يجب ألا يتجاوز 50 حرفًا",
            ),
            NameAr => ("Company Name (Arabic)", "اسم الشركة بالعربية"),
            EnterNameAr => (
                "Enter company name in Arabic",
                "أدخل اسم الشركة بالعربية",
            ),
            NameArRequired => (
                "Company name in Arabic is required",
                "اسم الشركة بالعربية مطلوب",
            ),
            NameArMin => (
                "Company name in Arabic must be at least 3 characters",
                "اسم الشركة بالعربية يجب ألا يقل عن 3 أحرف",
            ),
            NameArMax => (
                "Company name in Arabic must not exceed 50 characters",
                "اسم الشركة بالعربية يجب ألا يتجاوز 50 حرفًا",
            ),
            PhoneNumber => ("Phone Number", "رقم الهاتف"),
            EnterPhone => ("Enter your phone number", "أدخل رقم الهاتف"),
            PhoneRequired => ("Phone number is required", "رقم الهاتف مطلوب"),
            PhoneInvalid => {
                ("Enter a valid phone number", "أدخل رقم هاتف صحيح")
            }
            WebsiteUrl => ("Website URL", "رابط الموقع الإلكتروني"),
            EnterWebsite => ("Enter your website URL", "أدخل رابط الموقع"),
            WebsiteRequired => ("Website URL is required", "رابط الموقع مطلوب"),
            WebsiteInvalid => ("Enter a valid URL", "أدخل رابط الموقع صحيح"),
            CompanyLogo => ("Company Logo", "شعار الشركة"),
            UploadLogo => ("Upload company logo", "ارفع شعار الشركة"),
            LogoSelected => ("Selected file:", "تم اختيار الملف:"),
            CreateAccount => ("Create Account", "إنشاء الحساب"),
            Creating => ("Creating...", "جاري الإنشاء..."),
            SignupSuccess => (
                "Company account created successfully!",
                "تم إنشاء حساب الشركة بنجاح!",
            ),

            LoginTitle => ("Login", "تسجيل الدخول"),
            LoggingIn => ("Logging in...", "جاري تسجيل الدخول..."),
            LoginSuccess => ("Logged in successfully!", "تم تسجيل الدخول بنجاح!"),
            ForgotPasswordLink => {
                ("Forgot your password?", "نسيت كلمة المرور؟")
            }
            NoAccount => ("Don't have an account?", "ليس لديك حساب؟"),
            SignupLink => ("Create one", "أنشئ حسابًا"),

            ForgotPasswordTitle => ("Forgot Password", "نسيت كلمة المرور"),
            ForgotPasswordDescription => (
                "Enter your email and we'll send you a code to set a new password",
                "أدخل بريدك الإلكتروني وسنرسل لك رمزًا لتعيين كلمة مرور جديدة",
            ),
            SendOtp => ("Send code", "إرسال الرمز"),
            Sending => ("Sending...", "جاري الإرسال..."),
            OtpSent => (
                "A verification code has been sent to your email.",
                "تم إرسال رمز التحقق إلى بريدك الإلكتروني.",
            ),

            SetPasswordTitle => ("Set Password", "تعيين كلمة المرور"),
            Otp => ("Verification Code", "رمز التحقق"),
            EnterOtp => (
                "Enter the 6-digit code",
                "أدخل الرمز المكون من 6 أرقام",
            ),
            OtpRequired => ("Verification code is required", "رمز التحقق مطلوب"),
            OtpLength => (
                "Verification code must be exactly 6 characters",
                "يجب أن يتكون رمز التحقق من 6 خانات بالضبط",
            ),
            NewPassword => ("New Password", "كلمة المرور الجديدة"),
            EnterNewPassword => {
                ("Enter new password", "أدخل كلمة المرور الجديدة")
            }
            PasswordPolicy => ("Enter a valid password", "أدخل كلمة مرور صحيحة"),
            PasswordHint => (
                "8-16 characters with an uppercase letter, a lowercase letter, a number and a symbol.",
                "من 8 إلى 16 حرفًا وتحتوي على حرف كبير وحرف صغير ورقم ورمز.",
            ),
            ConfirmPassword => ("Confirm Password", "تأكيد كلمة المرور"),
            EnterConfirmPassword => {
                ("Confirm your password", "أكد كلمة المرور")
            }
            ConfirmPasswordRequired => (
                "Confirm Password should be required",
                "يجب إدخال تأكيد كلمة المرور",
            ),
            PasswordsMismatch => {
                ("Passwords do not match.", "كلمات المرور غير متطابقة")
            }
            Submit => ("Submit", "إرسال"),
            Submitting => ("Submitting...", "جاري الارسال..."),
            PasswordSetSuccess => (
                "Password set successfully!",
                "تم تعيين كلمة المرور بنجاح!",
            ),
            ResendOtp => ("Resend code", "إعادة إرسال الرمز"),
            Resending => ("Resending...", "جاري إعادة الإرسال..."),
            OtpResent => (
                "A new verification code has been sent to your email.",
                "تم إرسال رمز تحقق جديد إلى بريدك الإلكتروني.",
            ),

            HomeTitle => ("Company Portal", "بوابة الشركات"),
            Welcome => ("Welcome", "مرحبًا"),
            Logout => ("Logout", "تسجيل الخروج"),
            NotFound => ("Page not found", "الصفحة غير موجودة"),
        }
    }
}
