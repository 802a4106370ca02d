pub fn render_index() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f4f1fb;
      --bg-2: #d9d2f2;
      --ink: #2b2a33;
      --accent: #7a6ff0;
      --accent-2: #2f4858;
      --good: #2d7a4b;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(58, 52, 104, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ece6fa 60%, #f6f2fc 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    .user-card {
      display: flex;
      align-items: center;
      gap: 16px;
    }

    .avatar {
      width: 56px;
      height: 56px;
      display: grid;
      place-items: center;
      font-size: 1.6rem;
      background: white;
      border-radius: 50%;
      border: 1px solid rgba(58, 52, 104, 0.12);
    }

    .user-meta {
      flex: 1;
      display: grid;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.5rem, 3vw, 2rem);
      margin: 0;
    }

    .level-row {
      display: flex;
      align-items: center;
      gap: 10px;
      font-size: 0.9rem;
      color: #5f5c6b;
    }

    .level-bar {
      width: 160px;
      height: 8px;
      background: rgba(58, 52, 104, 0.12);
      border-radius: 999px;
      overflow: hidden;
    }

    .level-fill {
      height: 100%;
      width: 0%;
      background: var(--accent);
      border-radius: 999px;
      transition: width 300ms ease;
    }

    .xp-badge {
      background: var(--accent);
      color: white;
      font-weight: 600;
      padding: 10px 16px;
      border-radius: 999px;
      box-shadow: 0 10px 24px rgba(122, 111, 240, 0.3);
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(58, 52, 104, 0.08);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      color: #6b6478;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(58, 52, 104, 0.12);
    }

    .add-habit {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    .add-habit input,
    .add-habit select,
    .modal input {
      font: inherit;
      padding: 10px 14px;
      border-radius: 12px;
      border: 1px solid rgba(58, 52, 104, 0.18);
      background: white;
    }

    .add-habit input {
      flex: 1;
      min-width: 180px;
    }

    button {
      font: inherit;
      cursor: pointer;
    }

    .btn-primary {
      appearance: none;
      border: none;
      border-radius: 12px;
      padding: 10px 18px;
      font-weight: 600;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(122, 111, 240, 0.3);
      transition: transform 150ms ease;
    }

    .btn-primary:active {
      transform: scale(0.97);
    }

    .habit-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
      gap: 16px;
    }

    .habit-card {
      background: white;
      border-radius: 18px;
      padding: 16px;
      border: 1px solid rgba(58, 52, 104, 0.1);
      display: grid;
      gap: 10px;
    }

    .habit-card.completed {
      border-color: rgba(45, 122, 75, 0.5);
      background: #f3faf5;
    }

    .habit-top {
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    .category-tag {
      color: white;
      font-size: 0.75rem;
      font-weight: 600;
      padding: 4px 10px;
      border-radius: 999px;
      text-transform: capitalize;
    }

    .delete-btn {
      background: transparent;
      border: none;
      color: #9a93a8;
      font-size: 1.1rem;
      line-height: 1;
    }

    .habit-card h3 {
      margin: 0;
      font-size: 1.05rem;
      overflow-wrap: anywhere;
    }

    .streak-row {
      display: flex;
      justify-content: space-between;
      align-items: center;
      font-size: 0.9rem;
      color: #5f5c6b;
    }

    .check-btn {
      border: 1px solid rgba(58, 52, 104, 0.18);
      background: white;
      border-radius: 999px;
      padding: 6px 14px;
      font-weight: 600;
    }

    .check-btn.checked {
      background: var(--good);
      border-color: var(--good);
      color: white;
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(58, 52, 104, 0.1);
    }

    .chart-card h3 {
      margin: 0 0 10px;
      font-size: 1.05rem;
    }

    .chart-card svg {
      width: 100%;
      height: 220px;
      display: block;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(58, 52, 104, 0.12);
    }

    .chart-label {
      fill: #7a7489;
      font-size: 11px;
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .summary-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 16px;
      border: 1px solid rgba(58, 52, 104, 0.1);
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b8599;
    }

    .stat .value {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .category-list,
    .streak-list {
      display: grid;
      gap: 10px;
    }

    .category-item,
    .streak-item {
      display: flex;
      align-items: center;
      gap: 12px;
      background: white;
      border: 1px solid rgba(58, 52, 104, 0.1);
      border-radius: 14px;
      padding: 10px 14px;
    }

    .color-box {
      width: 14px;
      height: 14px;
      border-radius: 4px;
    }

    .count-badge,
    .rank {
      margin-left: auto;
      background: rgba(58, 52, 104, 0.08);
      border-radius: 999px;
      padding: 4px 10px;
      font-size: 0.85rem;
      font-weight: 600;
    }

    .streak-item .rank {
      margin-left: 0;
    }

    .streak-item .habit-info {
      display: grid;
    }

    .streak-item small {
      color: #8b8599;
      text-transform: capitalize;
    }

    .streak-item .flames {
      margin-left: auto;
      font-weight: 600;
    }

    .status {
      font-size: 0.95rem;
      color: #6b6478;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: var(--good);
    }

    .empty-note {
      color: #8b8599;
      font-size: 0.95rem;
      margin: 0;
    }

    .overlay {
      position: fixed;
      inset: 0;
      background: rgba(43, 42, 51, 0.45);
      display: grid;
      place-items: center;
      padding: 18px;
    }

    .modal {
      width: min(360px, 100%);
      background: white;
      border-radius: 20px;
      padding: 28px;
      display: grid;
      gap: 12px;
      box-shadow: var(--shadow);
    }

    .modal h2 {
      margin: 0;
      font-family: "Fraunces", "Georgia", serif;
    }

    .modal .error {
      margin: 0;
      min-height: 1.2em;
      color: #c63b2b;
      font-size: 0.9rem;
    }

    .link {
      background: transparent;
      border: none;
      color: var(--accent);
      font-weight: 600;
      padding: 4px;
    }

    [hidden] {
      display: none !important;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 24px 18px;
      }
      .user-card {
        flex-wrap: wrap;
      }
    }
  </style>
</head>
<body>
  <main class="app" id="app" hidden>
    <header>
      <div class="user-card">
        <div class="avatar">👤</div>
        <div class="user-meta">
          <h1>My Progress</h1>
          <div class="level-row">
            <span id="level-label">Level 0</span>
            <div class="level-bar"><div class="level-fill" id="level-fill"></div></div>
          </div>
        </div>
        <div class="xp-badge" id="xp-badge">0 XP</div>
        <button class="link" id="logout-btn" type="button">Log out</button>
      </div>
    </header>

    <nav class="tabs" role="tablist">
      <button class="tab active" type="button" data-tab="habits" role="tab" aria-selected="true">Habits</button>
      <button class="tab" type="button" data-tab="progress" role="tab" aria-selected="false">Progress</button>
      <button class="tab" type="button" data-tab="stats" role="tab" aria-selected="false">Stats</button>
    </nav>

    <section class="panel" id="panel-habits">
      <form class="add-habit" id="add-form">
        <input id="habit-name" type="text" placeholder="New habit..." autocomplete="off" />
        <select id="habit-category"></select>
        <button class="btn-primary" type="submit">+</button>
      </form>
      <p class="empty-note" id="habits-empty" hidden>No habits yet. Add one above to get started.</p>
      <div class="habit-grid" id="habit-grid"></div>
    </section>

    <section class="panel" id="panel-progress" hidden>
      <div class="chart-card">
        <h3>Weekly XP</h3>
        <svg id="xp-chart" viewBox="0 0 600 220" role="img" aria-label="XP per day"></svg>
      </div>
      <div class="chart-card">
        <h3>Daily consistency</h3>
        <svg id="consistency-chart" viewBox="0 0 600 220" role="img" aria-label="Completion percentage per day"></svg>
      </div>
      <div class="summary-grid">
        <div class="stat">
          <span class="label">Today</span>
          <span class="value" id="summary-today">0/0</span>
        </div>
        <div class="stat">
          <span class="label">7-day average</span>
          <span class="value" id="summary-average">0%</span>
        </div>
        <div class="stat">
          <span class="label">Longest streak</span>
          <span class="value" id="summary-streak">🔥 0</span>
        </div>
      </div>
    </section>

    <section class="panel" id="panel-stats" hidden>
      <div class="chart-card">
        <h3>Habits by category</h3>
        <div class="category-list" id="category-list"></div>
      </div>
      <div class="chart-card">
        <h3>Top streaks</h3>
        <div class="streak-list" id="streak-list"></div>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <div class="overlay" id="auth-overlay" hidden>
    <div class="modal">
      <h2 id="auth-title">Log in</h2>
      <input id="auth-username" type="text" placeholder="Username" autocomplete="username" />
      <input id="auth-password" type="password" placeholder="Password" autocomplete="current-password" />
      <p class="error" id="auth-error"></p>
      <button class="btn-primary" id="auth-submit" type="button">Log in</button>
      <button class="link" id="auth-switch" type="button">Create an account</button>
    </div>
  </div>

  <script>
    const CATEGORIES = [
      { value: 'health', label: 'Health', color: '#0088fe' },
      { value: 'learning', label: 'Learning', color: '#00c49f' },
      { value: 'productivity', label: 'Productivity', color: '#ffbb28' },
      { value: 'mindfulness', label: 'Mindfulness', color: '#ff8042' },
      { value: 'fitness', label: 'Fitness', color: '#8884d8' },
      { value: 'social', label: 'Social', color: '#82ca9d' }
    ];

    const el = (id) => document.getElementById(id);
    const appEl = el('app');
    const overlayEl = el('auth-overlay');
    const statusEl = el('status');
    const habitGrid = el('habit-grid');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    let ledgerData = null;
    let progressData = null;
    let authMode = 'login';

    const categoryMeta = (value) =>
      CATEGORIES.find((category) => category.value === value) || CATEGORIES[0];

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.status === 204 ? null : res.json();
    };

    const postJson = (path, body) =>
      api(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });

    const updateHeader = (data) => {
      el('level-label').textContent = `Level ${data.level}`;
      el('level-fill').style.width = `${data.level_progress}%`;
      el('xp-badge').textContent = `${data.xp} XP`;
    };

    const renderHabits = () => {
      habitGrid.textContent = '';
      el('habits-empty').hidden = ledgerData.habits.length > 0;

      ledgerData.habits.forEach((habit) => {
        const card = document.createElement('div');
        card.className = habit.completed ? 'habit-card completed' : 'habit-card';

        const top = document.createElement('div');
        top.className = 'habit-top';

        const tag = document.createElement('span');
        const meta = categoryMeta(habit.category);
        tag.className = 'category-tag';
        tag.textContent = meta.label;
        tag.style.backgroundColor = meta.color;

        const del = document.createElement('button');
        del.className = 'delete-btn';
        del.type = 'button';
        del.textContent = '×';
        del.addEventListener('click', () => removeHabit(habit.id));

        top.append(tag, del);

        const name = document.createElement('h3');
        name.textContent = habit.name;

        const row = document.createElement('div');
        row.className = 'streak-row';

        const streak = document.createElement('span');
        streak.textContent = `🔥 ${habit.streak} days`;

        const check = document.createElement('button');
        check.type = 'button';
        check.className = habit.completed ? 'check-btn checked' : 'check-btn';
        check.textContent = habit.completed ? '✓ Done' : 'Mark';
        check.addEventListener('click', () => toggleHabit(habit.id));

        row.append(streak, check);
        card.append(top, name, row);
        habitGrid.append(card);
      });
    };

    const renderLineChart = (svg, points) => {
      if (!points.length) {
        svg.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }

      const width = 600;
      const height = 220;
      const paddingX = 44;
      const paddingY = 30;
      const top = 20;

      let max = Math.max(...points.map((point) => point.value), 1);
      const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
      const scaleY = (height - top - paddingY) / max;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - value * scaleY;

      const path = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.value).toFixed(2)}`)
        .join(' ');

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = (max * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${Math.round(value)}</text>`;
      }

      const xLabels = points
        .map((point, index) => `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${point.label}</text>`)
        .join('');

      const circles = points
        .map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.value)}" r="4" />`)
        .join('');

      svg.innerHTML = `${grid}<path class="chart-line" d="${path}" />${circles}${xLabels}`;
    };

    const renderBarChart = (svg, points) => {
      const width = 600;
      const height = 220;
      const paddingX = 44;
      const paddingY = 30;
      const top = 20;

      const slot = (width - paddingX * 2) / points.length;
      const barWidth = slot * 0.55;
      const scaleY = (height - top - paddingY) / 100;

      let grid = '';
      for (let i = 0; i <= 4; i += 1) {
        const value = (100 * i) / 4;
        const yPos = height - paddingY - value * scaleY;
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${value}%</text>`;
      }

      const bars = points
        .map((point, index) => {
          const barHeight = point.value * scaleY;
          const xPos = paddingX + index * slot + (slot - barWidth) / 2;
          const yPos = height - paddingY - barHeight;
          const color = CATEGORIES[index % CATEGORIES.length].color;
          const label = `<text class="chart-label" x="${xPos + barWidth / 2}" y="${height - paddingY + 18}" text-anchor="middle">${point.label}</text>`;
          return `<rect x="${xPos}" y="${yPos}" width="${barWidth}" height="${barHeight}" rx="4" fill="${color}" />${label}`;
        })
        .join('');

      svg.innerHTML = `${grid}${bars}`;
    };

    const renderProgress = () => {
      if (!progressData) {
        return;
      }

      const xpPoints = progressData.days.map((day) => ({
        label: day.day,
        value: day.xp_for_day
      }));
      renderLineChart(el('xp-chart'), xpPoints);

      const pctPoints = progressData.days.map((day) => ({
        label: day.day,
        value: day.total_habits > 0 ? (day.completed_count / day.total_habits) * 100 : 0
      }));
      renderBarChart(el('consistency-chart'), pctPoints);

      const summary = progressData.summary;
      el('summary-today').textContent = `${summary.completed_today}/${summary.total_habits}`;
      el('summary-average').textContent = `${summary.average_completion_pct}%`;
      el('summary-streak').textContent = `🔥 ${summary.longest_streak}`;
    };

    const renderStats = () => {
      const categoryList = el('category-list');
      categoryList.textContent = '';
      CATEGORIES.forEach((category) => {
        const count = ledgerData.habits.filter((habit) => habit.category === category.value).length;
        if (count === 0) {
          return;
        }
        const item = document.createElement('div');
        item.className = 'category-item';

        const box = document.createElement('div');
        box.className = 'color-box';
        box.style.backgroundColor = category.color;

        const label = document.createElement('span');
        label.textContent = category.label;

        const badge = document.createElement('div');
        badge.className = 'count-badge';
        badge.textContent = count;

        item.append(box, label, badge);
        categoryList.append(item);
      });
      if (!categoryList.children.length) {
        const note = document.createElement('p');
        note.className = 'empty-note';
        note.textContent = 'Nothing tracked yet.';
        categoryList.append(note);
      }

      const streakList = el('streak-list');
      streakList.textContent = '';
      [...ledgerData.habits]
        .sort((a, b) => b.streak - a.streak)
        .slice(0, 3)
        .forEach((habit, index) => {
          const item = document.createElement('div');
          item.className = 'streak-item';

          const rank = document.createElement('div');
          rank.className = 'rank';
          rank.textContent = `#${index + 1}`;

          const info = document.createElement('div');
          info.className = 'habit-info';
          const name = document.createElement('span');
          name.textContent = habit.name;
          const category = document.createElement('small');
          category.textContent = categoryMeta(habit.category).label;
          info.append(name, category);

          const flames = document.createElement('div');
          flames.className = 'flames';
          flames.textContent = `🔥 ${habit.streak} days`;

          item.append(rank, info, flames);
          streakList.append(item);
        });
      if (!streakList.children.length) {
        const note = document.createElement('p');
        note.className = 'empty-note';
        note.textContent = 'No streaks yet.';
        streakList.append(note);
      }
    };

    const renderAll = () => {
      updateHeader(ledgerData);
      renderHabits();
      renderProgress();
      renderStats();
    };

    const applyLedger = async (data) => {
      ledgerData = data;
      progressData = await api('/api/progress');
      renderAll();
    };

    const refresh = async () => {
      const [ledger, progress] = await Promise.all([api('/api/habits'), api('/api/progress')]);
      ledgerData = ledger;
      progressData = progress;
      renderAll();
    };

    const toggleHabit = async (id) => {
      try {
        await applyLedger(await postJson(`/api/habits/${id}/toggle`, {}));
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const removeHabit = async (id) => {
      try {
        await applyLedger(await api(`/api/habits/${id}`, { method: 'DELETE' }));
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const setActiveTab = (tab) => {
      tabs.forEach((button) => {
        const isActive = button.dataset.tab === tab;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      el('panel-habits').hidden = tab !== 'habits';
      el('panel-progress').hidden = tab !== 'progress';
      el('panel-stats').hidden = tab !== 'stats';
    };

    const setAuthMode = (mode) => {
      authMode = mode;
      el('auth-title').textContent = mode === 'login' ? 'Log in' : 'Register';
      el('auth-submit').textContent = mode === 'login' ? 'Log in' : 'Register';
      el('auth-switch').textContent =
        mode === 'login' ? 'Create an account' : 'Already registered? Log in';
      el('auth-error').textContent = '';
    };

    const showAuth = () => {
      appEl.hidden = true;
      overlayEl.hidden = false;
      setAuthMode('login');
    };

    const showApp = async () => {
      overlayEl.hidden = true;
      appEl.hidden = false;
      await refresh();
    };

    const submitAuth = async () => {
      const username = el('auth-username').value;
      const password = el('auth-password').value;
      try {
        await postJson(authMode === 'login' ? '/api/login' : '/api/register', {
          username,
          password
        });
        el('auth-username').value = '';
        el('auth-password').value = '';
        await showApp();
      } catch (err) {
        el('auth-error').textContent = err.message;
      }
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });

    const categorySelect = el('habit-category');
    CATEGORIES.forEach((category) => {
      const option = document.createElement('option');
      option.value = category.value;
      option.textContent = category.label;
      categorySelect.append(option);
    });

    el('add-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const name = el('habit-name').value;
      try {
        await applyLedger(await postJson('/api/habits', { name, category: categorySelect.value }));
        el('habit-name').value = '';
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    el('auth-submit').addEventListener('click', submitAuth);
    el('auth-password').addEventListener('keydown', (event) => {
      if (event.key === 'Enter') {
        submitAuth();
      }
    });
    el('auth-switch').addEventListener('click', () => {
      setAuthMode(authMode === 'login' ? 'register' : 'login');
    });

    el('logout-btn').addEventListener('click', async () => {
      try {
        await api('/api/logout', { method: 'POST' });
      } catch (err) {
        setStatus(err.message, 'error');
      }
      showAuth();
    });

    const boot = async () => {
      try {
        await api('/api/session');
        await showApp();
      } catch (err) {
        showAuth();
      }
    };

    boot();
  </script>
</body>
</html>
"##;
